use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, bounds)
    }
}

const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the up-to-8 grid-valid neighbors of a cell.
///
/// Offsets that fall outside `bounds` are skipped, so corner cells yield 3
/// neighbors and edge cells yield 5.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offset: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offset: 0,
        }
    }

    /// Applies `delta` to the center, returning a value only when it remains
    /// in bounds.
    fn displaced(&self, delta: (isize, isize)) -> Option<Coord2> {
        let (row, col) = self.center;
        let (d_row, d_col) = delta;
        let (max_row, max_col) = self.bounds;

        let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
        if next_row >= max_row {
            return None;
        }

        let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
        if next_col >= max_col {
            return None;
        }

        Some((next_row, next_col))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.offset) >= MOORE_OFFSETS.len() {
                return None;
            }

            let next_item = self.displaced(MOORE_OFFSETS[self.offset as usize]);
            self.offset += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
