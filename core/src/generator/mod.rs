use crate::*;
use ndarray::Array2;

pub use random::*;

mod random;

/// Strategy for placing mines on a fresh board.
///
/// Placement is deferred until the first reveal, so the strategy receives the
/// cell of that reveal and must leave it mine-free.
pub trait MinePlacer {
    fn place(self, config: BoardConfig, safe: Coord2) -> Array2<bool>;
}
