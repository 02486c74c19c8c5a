//! Dice tray: the input field plus the rendered dice.

mod intent;
mod reducer;
mod state;

pub use intent::TrayIntent;
pub use reducer::TrayReducer;
pub use state::TrayState;
