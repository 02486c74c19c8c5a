use crate::display::render;
use crate::ui::mvi::Reducer;
use crate::ui::tray::intent::TrayIntent;
use crate::ui::tray::state::TrayState;

pub struct TrayReducer;

impl Reducer for TrayReducer {
    type State = TrayState;
    type Intent = TrayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrayIntent::Input(ch) => {
                let mut state = state;
                state.input.push(ch);
                state.error = None;
                state
            }
            TrayIntent::Backspace => {
                let mut state = state;
                state.input.pop();
                state.error = None;
                state
            }
            TrayIntent::Rolled { roll } => {
                let mut state = state;
                render(&mut state.display, &roll);
                state.error = None;
                state
            }
            TrayIntent::Rejected { error } => TrayState {
                error: Some(error),
                ..state
            },
            TrayIntent::Reset => TrayState::default(),
        }
    }
}
