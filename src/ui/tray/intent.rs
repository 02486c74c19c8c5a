use crate::dice::{InputError, RollResult};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TrayIntent {
    /// Character typed into the count field.
    Input(char),
    Backspace,
    /// A roll finished; replace the displayed dice.
    Rolled { roll: RollResult },
    /// The count field did not hold a usable count. Dice stay as they were.
    Rejected { error: InputError },
    /// Clear dice, input and error.
    Reset,
}

impl Intent for TrayIntent {}
