use rand::rngs::ThreadRng;
use rand::Rng;

use crate::dice::face::{FaceValue, RollResult, MAX_FACE};

/// Source of uniform reals in `[0, 1)`.
pub trait Roller {
    fn unit(&mut self) -> f64;
}

/// [`Roller`] backed by any `rand` generator.
pub struct RngRoller<R: Rng> {
    rng: R,
}

pub type ThreadRoller = RngRoller<ThreadRng>;

impl<R: Rng> RngRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRoller<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Rolls `count` independent six-sided dice.
pub fn roll_dice<R: Roller + ?Sized>(count: usize, roller: &mut R) -> RollResult {
    (0..count).map(|_| face_from_unit(roller.unit())).collect()
}

fn face_from_unit(unit: f64) -> FaceValue {
    let scaled = (unit * f64::from(MAX_FACE)).floor();
    // Out-of-contract rollers (NaN, 1.0, negatives) still land on a real face.
    let index = if scaled.is_finite() && scaled > 0.0 {
        scaled as u8
    } else {
        0
    };
    FaceValue::clamped(index.saturating_add(1))
}
