use thiserror::Error;

use crate::dice::pattern::{pattern_for, FacePattern};

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Face value {0} is outside 1..=6")]
    InvalidFace(u8),
}

/// The number shown on one six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceValue(u8);

impl FaceValue {
    /// Builds a face from a value already known to be in range.
    pub(crate) fn clamped(value: u8) -> Self {
        Self(value.clamp(MIN_FACE, MAX_FACE))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn pattern(self) -> &'static FacePattern {
        pattern_for(self)
    }
}

impl TryFrom<u8> for FaceValue {
    type Error = DiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_FACE..=MAX_FACE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DiceError::InvalidFace(value))
        }
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered faces produced by a single roll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollResult {
    faces: Vec<FaceValue>,
}

impl RollResult {
    pub fn new(faces: Vec<FaceValue>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[FaceValue] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Sum of all face values.
    pub fn total(&self) -> u32 {
        self.faces.iter().map(|face| u32::from(face.get())).sum()
    }
}

impl FromIterator<FaceValue> for RollResult {
    fn from_iter<I: IntoIterator<Item = FaceValue>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_every_face() {
        for value in MIN_FACE..=MAX_FACE {
            let face = FaceValue::try_from(value).unwrap();
            assert_eq!(face.get(), value);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(FaceValue::try_from(0), Err(DiceError::InvalidFace(0)));
        assert_eq!(FaceValue::try_from(7), Err(DiceError::InvalidFace(7)));
    }

    #[test]
    fn clamped_keeps_value_in_range() {
        assert_eq!(FaceValue::clamped(0).get(), 1);
        assert_eq!(FaceValue::clamped(9).get(), 6);
        assert_eq!(FaceValue::clamped(4).get(), 4);
    }

    #[test]
    fn total_sums_faces() {
        let roll: RollResult = [1, 3, 6]
            .into_iter()
            .map(|v| FaceValue::try_from(v).unwrap())
            .collect();
        assert_eq!(roll.len(), 3);
        assert_eq!(roll.total(), 10);
    }

    #[test]
    fn empty_roll_has_zero_total() {
        let roll = RollResult::default();
        assert!(roll.is_empty());
        assert_eq!(roll.total(), 0);
    }
}
