use crate::ui::app::App;
use crate::ui::dice_body::DiceBody;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, TRAY_ACCENT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const INPUT_PROMPT: &str = " Dice: ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let tray = app.tray();

    frame.render_widget(Header::new().widget(&tray.display), regions.header);
    frame.render_widget(Clear, regions.body);
    frame.render_widget(DiceBody::new(&tray.display, app.pip()), regions.body);

    let offset = input_offset(&tray.input);
    let mut spans = vec![
        Span::styled(INPUT_PROMPT, Style::default().fg(TRAY_ACCENT)),
        Span::styled(tray.input.clone(), Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(error) = &tray.error {
        spans.push(Span::styled(
            format!("   {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" 0-{} ", app.max_count()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, regions.input);

    if regions.input.height > 2 {
        let x = input_cursor_x(regions.input, offset);
        frame.set_cursor_position((x, regions.input.y + 1));
    }

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

/// Display width of the prompt plus the typed text.
fn input_offset(input: &str) -> usize {
    Span::raw(INPUT_PROMPT).width() + Span::raw(input).width()
}

/// Cursor column after `offset` cells, kept inside the input box border.
fn input_cursor_x(input: Rect, offset: usize) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let max_x = input.right().saturating_sub(2);
    input.x.saturating_add(1).saturating_add(offset).min(max_x)
}
