use alloc::vec::Vec;

use crate::*;

/// Flood-fill reveal starting at `start`, in two phases.
///
/// Phase 1 cascades through the connected region of unknown-proximity cells
/// (untouched cells included, since absence reads as unknown) using a LIFO
/// work stack. Phase 2 walks every cell visited in phase 1 once more and
/// reveals its remaining neighbors, exposing the numeric border ring around
/// the flooded region without cascading further.
///
/// Phase 1 never crosses a nonzero-proximity cell, which is what makes the
/// border pass safe: a zero-region can only border numbered cells, never
/// mines. Do not collapse the two phases.
///
/// Returns the number of cells that actually transitioned to revealed, the
/// caller's cumulative contribution to its reveal count.
pub fn reveal_from(config: &GameConfig, board: &mut Board, start: CellIdx) -> CellCount {
    let mut revealed = 0;

    let mut stack = Vec::from([start]);
    let mut visited = Vec::from([start]);
    while let Some(idx) = stack.pop() {
        revealed += board.mark_revealed(idx) as CellCount;

        for neighbor_idx in config.neighbors(idx) {
            let cell = board.cell(neighbor_idx);
            if cell.is_unknown() && cell.is_revealable() {
                board.mark_revealed(neighbor_idx);
                revealed += 1;
                stack.push(neighbor_idx);
                visited.push(neighbor_idx);
            }
        }
    }
    log::trace!("cascade from {start} flooded {} cells", visited.len());

    for &idx in &visited {
        for neighbor_idx in config.neighbors(idx) {
            if board.cell(neighbor_idx).is_revealable() {
                revealed += board.mark_revealed(neighbor_idx) as CellCount;
            }
        }
    }

    log::trace!("reveal from {start} uncovered {revealed} cells");
    revealed
}

/// Flag-toggle state machine, available before the first click and never a
/// trigger for placement or reveal logic. With marks enabled the cycle is
/// untouched -> flagged -> questioned -> untouched.
pub fn toggle_flag(board: &mut Board, idx: CellIdx, use_marks: bool) -> FlagOutcome {
    use FlagOutcome::*;

    let existed = board.contains(idx);
    let cell = board.cell_mut(idx);
    match cell.status {
        CellStatus::Revealed => NoChange,
        CellStatus::Untouched => {
            cell.status = CellStatus::Flagged;
            if existed { ToggledOn } else { Created }
        }
        CellStatus::Flagged if use_marks => {
            cell.status = CellStatus::Questioned;
            Questioned
        }
        CellStatus::Flagged => {
            cell.status = CellStatus::Untouched;
            ToggledOff
        }
        CellStatus::Questioned => {
            cell.status = CellStatus::Untouched;
            Unmarked
        }
    }
}
