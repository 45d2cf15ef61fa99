#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod game;
mod generator;
mod types;

/// Game type: board dimensions, mine count, and whether the flag toggle
/// cycles through question marks.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
    pub marks: bool,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10, false);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40, false);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99, false);

    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount, marks: bool) -> Self {
        Self {
            height,
            width,
            mines,
            marks,
        }
    }

    /// Validated constructor. The mine count must leave room for the
    /// first-click safe zone, which covers up to 9 cells.
    pub fn new(height: Coord, width: Coord, mines: CellCount, marks: bool) -> Result<Self> {
        let invalid = GameError::InvalidSettings {
            height,
            width,
            mines,
        };
        if height == 0 || width == 0 {
            return Err(invalid);
        }
        let total = mult(height, width);
        if mines == 0 || total <= 8 || mines >= total - 8 {
            return Err(invalid);
        }
        Ok(Self::new_unchecked(height, width, mines, marks))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    /// Cells that must be revealed to win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn coord_to_idx(&self, col: Coord, row: Coord) -> CellIdx {
        self.width as CellIdx * row as CellIdx + col as CellIdx
    }

    pub const fn idx_to_coord(&self, idx: CellIdx) -> (Coord, Coord) {
        (
            (idx % self.width as CellIdx) as Coord,
            (idx / self.width as CellIdx) as Coord,
        )
    }

    pub const fn contains(&self, idx: CellIdx) -> bool {
        idx < self.total_cells()
    }

    pub fn validate_idx(&self, idx: CellIdx) -> Result<CellIdx> {
        if self.contains(idx) {
            Ok(idx)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// In-bounds neighbors of `idx` under the 8-cell kernel, in stable
    /// kernel order.
    pub fn neighbors(&self, idx: CellIdx) -> NeighborIter {
        NeighborIter::new(idx, self.width, self.height)
    }

    /// Maps a fractional pointer position within the board's bounding box to
    /// a cell index. Both components must be in `[0, 1)`; anything else is a
    /// caller contract violation.
    pub fn pointer_to_idx(&self, x: f64, y: f64) -> CellIdx {
        debug_assert!((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y));
        let col = (x * self.width as f64) as Coord;
        let row = (y * self.height as f64) as Coord;
        self.coord_to_idx(col, row)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    /// Flagged a cell that had no entry yet.
    Created,
    ToggledOn,
    ToggledOff,
    /// Flag demoted to a question mark (marks enabled).
    Questioned,
    /// Question mark removed.
    Unmarked,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Contribution to the flag count; question marks never count as flags.
    pub const fn flag_delta(self) -> i32 {
        use FlagOutcome::*;
        match self {
            Created => 1,
            ToggledOn => 1,
            ToggledOff => -1,
            Questioned => -1,
            NoChange => 0,
            Unmarked => 0,
        }
    }
}

/// Outcome of a select interaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
