#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine budget for one game instance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Clamps degenerate inputs instead of failing: at least one row and
    /// column, and at least one mine-free cell so the first click can always
    /// be kept safe. Zero mines is a legal configuration.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.min(mult(rows, cols) - 1);
        Self::new_unchecked(rows, cols, mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn in_bounds(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_mines_below_total_cells() {
        let config = BoardConfig::new(3, 3, 50);

        assert_eq!(config.mines, 8);
        assert_eq!(config.safe_cell_count(), 1);
    }

    #[test]
    fn config_allows_zero_mines() {
        let config = BoardConfig::new(3, 3, 0);

        assert_eq!(config.mines, 0);
        assert_eq!(config.safe_cell_count(), 9);
    }

    #[test]
    fn config_clamps_empty_dimensions() {
        let config = BoardConfig::new(0, 0, 0);

        assert_eq!(config.size(), (1, 1));
        assert!(config.in_bounds((0, 0)));
        assert!(!config.in_bounds((0, 1)));
    }
}
