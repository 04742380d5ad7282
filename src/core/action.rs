//! Board cells and actions.
//!
//! A `Cell` is an opaque index into the board; the geometry (width, knight
//! offsets) belongs to the game implementation, not the type. An `Action`
//! moves the active player's piece to a cell — a placement during the
//! opening, a knight move afterwards.

use serde::{Deserialize, Serialize};

/// Index of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    /// Create a new cell index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Move the active player's piece to the target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(pub Cell);

impl Action {
    /// Create an action targeting the given cell.
    #[must_use]
    pub const fn to(cell: Cell) -> Self {
        Self(cell)
    }

    /// The destination cell of this action.
    #[must_use]
    pub const fn target(self) -> Cell {
        self.0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-> {}", self.0)
    }
}
