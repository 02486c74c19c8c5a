use crate::dice::face::FaceValue;

/// Width and height of the pip grid.
pub const GRID_SIZE: usize = 3;

/// `(row, column)` inside the pip grid.
pub type Cell = (usize, usize);

/// Pip layout for one face value.
#[derive(Debug, PartialEq, Eq)]
pub struct FacePattern {
    cells: &'static [Cell],
}

static FACE_PATTERNS: [FacePattern; 6] = [
    FacePattern { cells: &[(1, 1)] },
    FacePattern {
        cells: &[(0, 0), (2, 2)],
    },
    FacePattern {
        cells: &[(0, 0), (1, 1), (2, 2)],
    },
    FacePattern {
        cells: &[(0, 0), (0, 2), (2, 0), (2, 2)],
    },
    FacePattern {
        cells: &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)],
    },
    FacePattern {
        cells: &[(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)],
    },
];

pub fn pattern_for(face: FaceValue) -> &'static FacePattern {
    // FaceValue is always 1..=6.
    &FACE_PATTERNS[usize::from(face.get() - 1)]
}

impl FacePattern {
    pub fn cells(&self) -> &'static [Cell] {
        self.cells
    }

    pub fn is_active(&self, row: usize, column: usize) -> bool {
        self.cells.contains(&(row, column))
    }

    /// Grid as booleans, row-major.
    pub fn grid(&self) -> [[bool; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[false; GRID_SIZE]; GRID_SIZE];
        for &(row, column) in self.cells {
            grid[row][column] = true;
        }
        grid
    }
}
