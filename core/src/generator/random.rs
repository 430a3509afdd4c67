use super::*;

/// Uniform random placement without replacement over every cell except the
/// safe one. No other cell is excluded; mines may land directly adjacent to
/// the safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, config: BoardConfig, safe: Coord2) -> Array2<bool> {
        use rand::prelude::*;

        let total_cells = config.total_cells();

        let mines = if config.mines >= total_cells {
            log::warn!(
                "Cannot keep the first cell safe with {} mines in {} cells, clamping",
                config.mines,
                total_cells
            );
            total_cells - 1
        } else {
            config.mines
        };

        let mut mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        // The safe cell is marked up front so sampling skips it, and cleared
        // again once every mine has landed.
        mask[safe.to_nd_index()] = true;
        let mut free_cells = total_cells - 1;
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mask.as_slice_mut().expect("mask layout should be standard");
            while mines_placed < mines && free_cells > 0 {
                let mut slot: CellCount = rng.random_range(0..free_cells);
                for cell in cells.iter_mut() {
                    if *cell {
                        continue;
                    }
                    if slot == 0 {
                        *cell = true;
                        mines_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                    slot -= 1;
                }
            }
        }

        mask[safe.to_nd_index()] = false;

        let count = mask.iter().filter(|&&mine| mine).count() as CellCount;
        if count != config.mines {
            log::warn!(
                "Placed mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_for(config: BoardConfig, seed: u64, safe: Coord2) -> Array2<bool> {
        RandomMinePlacer::new(seed).place(config, safe)
    }

    fn mine_count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&mine| mine).count()
    }

    #[test]
    fn places_exactly_the_requested_mine_count() {
        let config = BoardConfig::new(8, 8, 10);

        for seed in 0..32 {
            let mask = mask_for(config, seed, (3, 3));
            assert_eq!(mine_count(&mask), 10);
        }
    }

    #[test]
    fn safe_cell_never_receives_a_mine() {
        let config = BoardConfig::new(4, 4, 15);

        for seed in 0..32 {
            let mask = mask_for(config, seed, (2, 1));
            assert!(!mask[(2, 1).to_nd_index()]);
        }
    }

    #[test]
    fn saturated_config_fills_every_other_cell() {
        let config = BoardConfig::new(3, 3, 8);
        let mask = mask_for(config, 7, (1, 1));

        assert_eq!(mine_count(&mask), 8);
        assert!(!mask[(1, 1).to_nd_index()]);
    }

    #[test]
    fn same_seed_produces_same_mask() {
        let config = BoardConfig::new(8, 8, 10);

        let first = mask_for(config, 42, (0, 0));
        let second = mask_for(config, 42, (0, 0));

        assert_eq!(first, second);
    }

    #[test]
    fn zero_mines_produces_an_empty_mask() {
        let config = BoardConfig::new(3, 3, 0);
        let mask = mask_for(config, 1, (0, 0));

        assert_eq!(mine_count(&mask), 0);
    }
}
