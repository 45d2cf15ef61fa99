use crate::*;
pub use random::*;

mod random;

/// Strategy for populating an empty board with mines after the first click.
pub trait MinePlacer {
    /// Places up to `config.mines` mines on `board`, never inside the safe
    /// zone around `safe_idx` (the clicked cell plus its full neighborhood).
    /// Returns the number of mines actually placed, which falls short of the
    /// request only when the candidate scan exhausts the grid.
    fn place_mines(self, config: &GameConfig, board: &mut Board, safe_idx: CellIdx) -> CellCount;
}
