use alloc::vec::Vec;
use smallvec::SmallVec;

use super::*;

/// Uniform placement driven by an inside-out Fisher-Yates permutation of all
/// cell indices, scanned in order while skipping the first-click safe zone.
/// Proximity counts are updated incrementally as each mine lands, so only
/// cells in the blast adjacency of a mine ever get an entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShufflePlacer {
    seed: u64,
}

impl ShufflePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for ShufflePlacer {
    fn place_mines(self, config: &GameConfig, board: &mut Board, safe_idx: CellIdx) -> CellCount {
        use rand::prelude::*;

        let total = config.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // Inside-out shuffle: drawing j in 0..=i and copying slot j forward
        // before overwriting it yields an unbiased permutation in one pass.
        let mut permutation: Vec<CellIdx> = Vec::with_capacity(total as usize);
        for i in 0..total {
            let j = rng.random_range(0..=i);
            if j == i {
                permutation.push(i);
            } else {
                let displaced = permutation[j as usize];
                permutation.push(displaced);
                permutation[j as usize] = i;
            }
        }

        // The clicked cell and its whole neighborhood stay mine-free so the
        // opening move is never trivial.
        let mut safe_zone: SmallVec<[CellIdx; 9]> = config.neighbors(safe_idx).collect();
        safe_zone.push(safe_idx);

        let mut placed = 0;
        for &idx in &permutation {
            if placed == config.mines {
                break;
            }
            if safe_zone.contains(&idx) {
                continue;
            }
            place_mine(config, board, idx);
            placed += 1;
        }

        if placed < config.mines {
            log::warn!(
                "placement scan exhausted, placed {placed} of {} mines",
                config.mines
            );
        }
        log::debug!("placed {placed} mines, safe zone around cell {safe_idx}");
        placed
    }
}

/// Writes a mine at `idx` and bumps the proximity of every neighbor entry,
/// creating neighbor entries on first contact.
pub(crate) fn place_mine(config: &GameConfig, board: &mut Board, idx: CellIdx) {
    board.cell_mut(idx).proximity = PROX_MINE;

    for neighbor_idx in config.neighbors(idx) {
        let cell = board.cell_mut(neighbor_idx);
        if cell.is_mine() {
            continue;
        }
        // the -1 sentinel means "no contact yet", not a count
        cell.proximity = if cell.is_unknown() {
            1
        } else {
            cell.proximity + 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    fn place(config: &GameConfig, seed: u64, safe_idx: CellIdx) -> (Board, CellCount) {
        let mut board = Board::new();
        let placed = ShufflePlacer::new(seed).place_mines(config, &mut board, safe_idx);
        (board, placed)
    }

    fn mine_set(board: &Board) -> BTreeSet<CellIdx> {
        board.mine_indices().collect()
    }

    #[test]
    fn safe_zone_never_contains_mines() {
        let config = GameConfig::BEGINNER;
        for seed in 0..16 {
            for &click in &[0, 8, 40, 72, 80] {
                let (board, placed) = place(&config, seed, click);
                assert_eq!(placed, config.mines);

                let mines = mine_set(&board);
                assert!(!mines.contains(&click));
                for neighbor_idx in config.neighbors(click) {
                    assert!(!mines.contains(&neighbor_idx));
                }
            }
        }
    }

    #[test]
    fn adjacency_counts_match_brute_force() {
        let config = GameConfig::new_unchecked(16, 16, 40, false);
        let (board, placed) = place(&config, 0xBEEF, 100);
        assert_eq!(placed, 40);

        let mines = mine_set(&board);
        for idx in 0..config.total_cells() {
            let expected = config
                .neighbors(idx)
                .filter(|pos| mines.contains(pos))
                .count() as i8;
            let cell = board.cell(idx);

            if mines.contains(&idx) {
                assert_eq!(cell.proximity, PROX_MINE);
            } else if expected > 0 {
                assert_eq!(cell.proximity, expected, "cell {idx}");
            } else {
                // no mine contact: either untouched or an unknown entry
                assert_eq!(cell.proximity, PROX_UNKNOWN, "cell {idx}");
            }
        }
    }

    #[test]
    fn board_stays_sparse() {
        let config = GameConfig::new_unchecked(30, 30, 5, false);
        let (board, _) = place(&config, 7, 0);
        // at most 9 entries per mine
        assert!(board.len() <= 45);
    }

    #[test]
    fn exhausted_scan_places_nothing() {
        // center click on a 3x3 board excludes every cell; settings
        // validation normally rejects this game type outright
        let config = GameConfig::new_unchecked(3, 3, 1, false);
        let (board, placed) = place(&config, 1, 4);

        assert_eq!(placed, 0);
        assert_eq!(mine_set(&board).len(), 0);
    }

    #[test]
    fn beginner_corner_click_scenario() {
        let config = GameConfig::BEGINNER;
        let (board, placed) = place(&config, 42, 0);

        assert_eq!(placed, 10);
        let mines = mine_set(&board);
        assert_eq!(mines.len(), 10);
        for excluded in [0u32, 1, 9, 10] {
            assert!(!mines.contains(&excluded));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::EXPERT;
        let (a, _) = place(&config, 99, 17);
        let (b, _) = place(&config, 99, 17);
        assert_eq!(mine_set(&a), mine_set(&b));

        let layouts: BTreeSet<Vec<CellIdx>> = (0..8)
            .map(|seed| place(&config, seed, 17).0.mine_indices().collect())
            .collect();
        assert!(layouts.len() > 1);
    }

    #[test]
    fn placement_preserves_existing_flag_status() {
        let config = GameConfig::BEGINNER;
        let mut board = Board::new();
        // player flagged a far cell before the first click
        board.cell_mut(80).status = CellStatus::Flagged;

        ShufflePlacer::new(3).place_mines(&config, &mut board, 0);

        assert!(board.cell(80).is_flagged());
    }
}
