use crate::dice::InputError;
use crate::display::DisplayState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrayState {
    /// Raw text of the count field.
    pub input: String,
    pub display: DisplayState,
    /// Error from the last roll attempt, cleared on the next edit.
    pub error: Option<InputError>,
}

impl UiState for TrayState {}

impl TrayState {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// True when nothing is shown and the field is blank.
    pub fn is_cleared(&self) -> bool {
        self.input.is_empty() && self.display.is_empty() && self.error.is_none()
    }
}
