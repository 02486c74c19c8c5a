//! Rendered dice state.
//!
//! The display is an owned value: [`render`] replaces its contents with one
//! block per face of a roll, [`DisplayState::clear`] empties it. Front ends
//! (the TUI body widget, headless text output) only read it.

use crate::dice::{FacePattern, FaceValue, RollResult, GRID_SIZE};

pub const DEFAULT_PIP: char = '●';

/// One die as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieBlock {
    face: FaceValue,
}

impl DieBlock {
    pub fn face(&self) -> FaceValue {
        self.face
    }

    pub fn pattern(&self) -> &'static FacePattern {
        self.face.pattern()
    }

    /// Grid rows with `pip` for active cells and spaces elsewhere.
    pub fn text_rows(&self, pip: char) -> [String; GRID_SIZE] {
        self.pattern().grid().map(|row| {
            row.iter()
                .map(|&active| if active { pip } else { ' ' })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    blocks: Vec<DieBlock>,
}

impl DisplayState {
    pub fn blocks(&self) -> &[DieBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn total(&self) -> u32 {
        self.blocks
            .iter()
            .map(|block| u32::from(block.face.get()))
            .sum()
    }
}

/// Replaces everything on `display` with the faces of `roll`.
pub fn render(display: &mut DisplayState, roll: &RollResult) {
    display.blocks = roll
        .faces()
        .iter()
        .map(|&face| DieBlock { face })
        .collect();
}

/// Formats the display as boxed dice laid out side by side.
///
/// Returns an empty string for an empty display.
pub fn format_text(display: &DisplayState, pip: char) -> String {
    if display.is_empty() {
        return String::new();
    }

    let inner = GRID_SIZE * 2 + 1;
    let top = format!("┌{}┐", "─".repeat(inner));
    let bottom = format!("└{}┘", "─".repeat(inner));

    let mut lines = vec![Vec::new(); GRID_SIZE + 2];
    for block in display.blocks() {
        lines[0].push(top.clone());
        for (index, row) in block.text_rows(pip).iter().enumerate() {
            lines[index + 1].push(format!("│ {} │", row));
        }
        lines[GRID_SIZE + 1].push(bottom.clone());
    }

    lines
        .into_iter()
        .map(|parts| parts.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
