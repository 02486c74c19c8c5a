//! Dice generation primitives.
//!
//! A roll is produced in three steps:
//!
//! ```text
//! input text ──parse_count──→ count ──roll_dice──→ RollResult
//!                                         ↑
//!                                       Roller
//! ```
//!
//! Each face value maps to a fixed [`FacePattern`] used by the renderer.

mod count;
mod face;
mod pattern;
mod roller;

pub use count::{parse_count, InputError};
pub use face::{DiceError, FaceValue, RollResult, MAX_FACE, MIN_FACE};
pub use pattern::{pattern_for, Cell, FacePattern, GRID_SIZE};
pub use roller::{roll_dice, RngRoller, Roller, ThreadRoller};
