use alloc::vec::Vec;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::*;

/// Sparse board store: only cells that have been touched (mined, given a
/// proximity count, revealed, or flagged) carry an entry. Absence of an
/// entry is equivalent to [`Cell::UNTOUCHED`], which keeps boards with few
/// mines relative to their area cheap to hold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    cells: HashMap<CellIdx, Cell>,
    touched: Vec<CellIdx>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of touched cells.
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    pub fn contains(&self, idx: CellIdx) -> bool {
        self.cells.contains_key(&idx)
    }

    /// Cell at `idx`; absent entries read as the untouched sentinel.
    pub fn cell(&self, idx: CellIdx) -> Cell {
        self.cells.get(&idx).copied().unwrap_or_default()
    }

    /// Mutable access to the cell at `idx`, creating the entry (and
    /// recording it in touch order) on first use.
    pub fn cell_mut(&mut self, idx: CellIdx) -> &mut Cell {
        match self.cells.entry(idx) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.touched.push(idx);
                entry.insert(Cell::UNTOUCHED)
            }
        }
    }

    /// Marks `idx` revealed, creating the entry if needed. Returns whether
    /// the status actually transitioned.
    pub fn mark_revealed(&mut self, idx: CellIdx) -> bool {
        let cell = self.cell_mut(idx);
        if cell.is_revealed() {
            false
        } else {
            cell.status = CellStatus::Revealed;
            true
        }
    }

    /// Touched indices in the order they were first stored, used to drive
    /// incremental rendering.
    pub fn touched_indices(&self) -> &[CellIdx] {
        &self.touched
    }

    /// Touched cells in touch order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIdx, Cell)> + '_ {
        self.touched.iter().map(move |&idx| (idx, self.cells[&idx]))
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = CellIdx> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(idx, _)| idx)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.touched.clear();
    }
}

// Serialized as a sequence of `(index, cell)` pairs in touch order: JSON
// maps cannot key by integer, and the pair form keeps touch order intact.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let entries: Vec<(CellIdx, Cell)> = Vec::deserialize(deserializer)?;
        let mut board = Board::new();
        for (idx, cell) in entries {
            *board.cell_mut(idx) = cell;
        }
        Ok(board)
    }
}
