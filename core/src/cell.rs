use serde::{Deserialize, Serialize};

/// Full per-cell state tracked by the board.
///
/// `adjacent_mines` is computed once at placement time and is only
/// meaningful for non-mine cells. Presentation layers must not surface
/// `is_mine` for unrevealed cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// True when the cell still accepts a reveal: hidden and not flagged.
    pub const fn is_playable(self) -> bool {
        !self.revealed && !self.flagged
    }
}
