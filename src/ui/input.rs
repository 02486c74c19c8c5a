use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match key.code {
        KeyCode::Enter => app.roll(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.on_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::empty())
    }

    fn make_app() -> App {
        App::new(&Config::default(), None)
    }

    #[test]
    fn typing_then_enter_rolls() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.tray().input, "3");
        assert_eq!(app.tray().display.blocks().len(), 3);
    }

    #[test]
    fn ctrl_r_resets() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.tray().is_cleared());
    }

    #[test]
    fn plain_r_is_typed() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.tray().input, "r");
    }

    #[test]
    fn escape_quits() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut event = press(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        handle_key(&mut app, event);
        assert!(app.tray().input.is_empty());
    }

    #[test]
    fn alt_chars_are_not_typed() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(app.tray().input.is_empty());
    }
}
