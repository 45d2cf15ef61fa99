use serde::{Deserialize, Serialize};

/// Proximity sentinel for cells whose mine adjacency has not been computed
/// yet. Untouched cells are assumed safe until placement contradicts that.
pub const PROX_UNKNOWN: i8 = -1;

/// Proximity value marking the cell itself as a mine.
pub const PROX_MINE: i8 = 0;

/// Player-visible status of a stored cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// Stored but not interacted with; carries a known proximity.
    Untouched,
    Revealed,
    Flagged,
    /// Question mark, only reachable when the game type enables marks.
    Questioned,
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Untouched
    }
}

/// One stored board cell. Cells absent from the sparse board read as
/// [`Cell::UNTOUCHED`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub status: CellStatus,
    /// `0` = mine, `1..=8` = neighboring mine count, `-1` = unknown.
    pub proximity: i8,
}

impl Cell {
    pub const UNTOUCHED: Self = Self {
        status: CellStatus::Untouched,
        proximity: PROX_UNKNOWN,
    };

    pub const fn is_mine(self) -> bool {
        self.proximity == PROX_MINE
    }

    pub const fn is_unknown(self) -> bool {
        self.proximity == PROX_UNKNOWN
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.status, CellStatus::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.status, CellStatus::Flagged)
    }

    /// Whether a cascade or border pass may mark this cell revealed.
    pub const fn is_revealable(self) -> bool {
        !matches!(self.status, CellStatus::Revealed | CellStatus::Flagged)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNTOUCHED
    }
}
