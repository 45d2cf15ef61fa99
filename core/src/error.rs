use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game settings: {height}x{width} with {mines} mines")]
    InvalidSettings {
        height: Coord,
        width: Coord,
        mines: CellCount,
    },
    #[error("cell index out of bounds")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
