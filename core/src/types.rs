/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine, flag, and reveal totals.
pub type CellCount = u32;

/// Linear cell index, `row * width + col`, row-major.
pub type CellIdx = u32;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Fixed 8-cell neighborhood kernel as `(dcol, drow)` offsets. The order is
/// arbitrary but must stay stable so traversal results are reproducible.
const KERNEL: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Applies `delta` to `(col, row)`, returning a value only when it remains in bounds.
fn apply_delta(
    col: Coord,
    row: Coord,
    (dcol, drow): (i32, i32),
    width: Coord,
    height: Coord,
) -> Option<(Coord, Coord)> {
    let next_col = col as i32 + dcol;
    let next_row = row as i32 + drow;

    if !(0..width as i32).contains(&next_col) {
        return None;
    }
    if !(0..height as i32).contains(&next_row) {
        return None;
    }

    Some((next_col as Coord, next_row as Coord))
}

/// Iterator over the in-bounds neighbor indices of a cell, in kernel order.
#[derive(Debug)]
pub struct NeighborIter {
    col: Coord,
    row: Coord,
    width: Coord,
    height: Coord,
    kernel_pos: u8,
}

impl NeighborIter {
    pub(crate) fn new(idx: CellIdx, width: Coord, height: Coord) -> Self {
        let col = (idx % width as CellIdx) as Coord;
        let row = (idx / width as CellIdx) as Coord;
        Self {
            col,
            row,
            width,
            height,
            kernel_pos: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIdx;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.kernel_pos as usize) < KERNEL.len() {
            let delta = KERNEL[self.kernel_pos as usize];
            self.kernel_pos += 1;

            if let Some((col, row)) = apply_delta(self.col, self.row, delta, self.width, self.height)
            {
                return Some(self.width as CellIdx * row as CellIdx + col as CellIdx);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::GameConfig;
    use alloc::vec::Vec;

    const CFG: GameConfig = GameConfig::new_unchecked(3, 3, 1, false);

    #[test]
    fn coord_index_round_trip() {
        let cfg = GameConfig::new_unchecked(16, 30, 99, false);
        for idx in 0..cfg.total_cells() {
            let (col, row) = cfg.idx_to_coord(idx);
            assert_eq!(cfg.coord_to_idx(col, row), idx);
        }
    }

    #[test]
    fn center_neighbors_follow_kernel_order() {
        let neighbors: Vec<_> = CFG.neighbors(4).collect();
        assert_eq!(neighbors, [5, 8, 7, 6, 3, 0, 1, 2]);
    }

    #[test]
    fn corner_neighbors_are_bounds_filtered() {
        let neighbors: Vec<_> = CFG.neighbors(0).collect();
        assert_eq!(neighbors, [1, 4, 3]);

        let neighbors: Vec<_> = CFG.neighbors(8).collect();
        assert_eq!(neighbors, [7, 4, 5]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let neighbors: Vec<_> = CFG.neighbors(1).collect();
        assert_eq!(neighbors, [2, 5, 4, 3, 0]);
    }

    #[test]
    fn single_row_board_neighbors() {
        let cfg = GameConfig::new_unchecked(1, 4, 1, false);
        let neighbors: Vec<_> = cfg.neighbors(1).collect();
        assert_eq!(neighbors, [2, 0]);
    }

    #[test]
    fn pointer_maps_to_cell() {
        let cfg = GameConfig::BEGINNER;
        assert_eq!(cfg.pointer_to_idx(0.0, 0.0), 0);
        assert_eq!(cfg.pointer_to_idx(0.999, 0.999), 80);
        // just past the first column boundary
        assert_eq!(cfg.pointer_to_idx(1.0 / 9.0 + 1e-9, 0.0), 1);
        // center of cell (4, 4)
        assert_eq!(cfg.pointer_to_idx(0.5, 0.5), 40);
    }
}
