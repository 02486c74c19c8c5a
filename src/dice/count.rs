use thiserror::Error;

/// User errors for the requested dice count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter how many dice to roll")]
    Empty,

    #[error("Dice count cannot be negative")]
    Negative,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    /// `requested` keeps the digits as typed; they may not fit in a `usize`.
    #[error("Cannot roll {requested} dice, at most {max} at once")]
    TooMany { requested: String, max: usize },
}

/// Parses the requested dice count from free-form input.
///
/// Surrounding whitespace and a leading `+` are accepted. Negative values,
/// fractions, anything non-numeric, and counts above `max` are rejected.
pub fn parse_count(input: &str, max: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber {
            input: trimmed.to_string(),
        });
    }

    // "-0" is still zero.
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(InputError::Negative);
    }

    match digits.parse::<usize>() {
        Ok(count) if count <= max => Ok(count),
        _ => Err(InputError::TooMany {
            requested: digits.to_string(),
            max,
        }),
    }
}
