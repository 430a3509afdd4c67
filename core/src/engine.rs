use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Result of a reveal, for keying external feedback off status transitions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a flag toggle, reporting the new flag state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One Minesweeper game instance.
///
/// Mine placement is deferred until the first reveal so that the revealed
/// cell is guaranteed mine-free. Out-of-turn calls (finished game, revealed
/// or flagged cell) are silent no-ops; only out-of-range coordinates are
/// rejected. A new game is a new `Board`, there is no in-place reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    seed: u64,
    mines_placed: bool,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            grid: Array2::default(config.size().to_nd_index()),
            seed,
            mines_placed: false,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            status: Default::default(),
            triggered_mine: None,
        }
    }

    /// Builds a board with a fixed mine layout, skipping the deferred
    /// placement phase (and with it the first-click safety guarantee).
    pub fn from_mine_mask(mask: Array2<bool>) -> Result<Self> {
        let dim = mask.dim();
        let rows: Coord = dim.0.try_into().map_err(|_| GameError::InvalidBoardShape)?;
        let cols: Coord = dim.1.try_into().map_err(|_| GameError::InvalidBoardShape)?;

        let mines = mask.iter().filter(|&&mine| mine).count() as CellCount;
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }

        let config = BoardConfig::new_unchecked(rows, cols, mines);
        let mut board = Self::new(config, 0);
        board.apply_mine_mask(&mask);
        Ok(board)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mask)
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count.0 as isize)
    }

    /// Read-only snapshot of one cell. `coords` must be in bounds; unlike
    /// the mutating entry points, this panics on out-of-range input.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveals a cell, placing the mines first if this is the first reveal
    /// of the game. Revealing a zero-adjacency cell cascades through its
    /// whole zero region plus the bordering numbered cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.status.is_finished() || !self.cell_at(coords).is_playable() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.mines_placed {
            self.place_mines(coords);
        }

        Ok(self.reveal_playable_cell(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.status.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.revealed {
            return Ok(FlagOutcome::NoChange);
        }

        cell.flagged = !cell.flagged;
        let now_flagged = cell.flagged;

        Ok(if now_flagged {
            self.flagged_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        })
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.config.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn place_mines(&mut self, safe: Coord2) {
        debug_assert!(!self.mines_placed, "mine placement must run only once");
        let mask = RandomMinePlacer::new(self.seed).place(self.config, safe);
        self.apply_mine_mask(&mask);
    }

    fn apply_mine_mask(&mut self, mask: &Array2<bool>) {
        for (cell, &mine) in self.grid.iter_mut().zip(mask.iter()) {
            cell.mine = mine;
        }
        self.recount_adjacency();
        self.mines_placed = true;
    }

    /// One full pass over the grid, run once per game right after placement.
    fn recount_adjacency(&mut self) {
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let count = self
                    .grid
                    .iter_neighbors((row, col))
                    .filter(|&pos| self.grid[pos.to_nd_index()].mine)
                    .count() as u8;
                self.grid[(row, col).to_nd_index()].adjacent_mines = count;
            }
        }
    }

    fn reveal_playable_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.grid[coords.to_nd_index()].mine {
            self.grid[coords.to_nd_index()].revealed = true;
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            return RevealOutcome::HitMine;
        }

        self.reveal_safe_region(coords);

        if self.revealed_count == Saturating(self.config.safe_cell_count()) {
            self.status = GameStatus::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Work-list flood fill. A cell with `adjacent_mines == 0` has no mine
    /// neighbor, so the queue can never contain a mine; flagged and
    /// already-revealed cells stop the fill, numbered cells are revealed but
    /// not expanded.
    fn reveal_safe_region(&mut self, origin: Coord2) {
        self.mark_revealed(origin);
        if self.grid[origin.to_nd_index()].adjacent_mines != 0 {
            return;
        }

        let mut visited = BTreeSet::from([origin]);
        let mut queue: VecDeque<Coord2> = self.grid.iter_neighbors(origin).collect();

        while let Some(coords) = queue.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let cell = self.grid[coords.to_nd_index()];
            if cell.revealed || cell.flagged {
                continue;
            }

            self.mark_revealed(coords);

            if cell.adjacent_mines == 0 {
                queue.extend(
                    self.grid
                        .iter_neighbors(coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn mark_revealed(&mut self, coords: Coord2) {
        let cell = &mut self.grid[coords.to_nd_index()];
        if !cell.revealed {
            cell.revealed = true;
            self.revealed_count += 1;
        }
    }
}
