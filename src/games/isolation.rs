//! Knight's Isolation on an 11x9 board.
//!
//! Two pieces that move like chess knights. The first two plies place the
//! pieces on any open cell; afterwards each move is a knight jump to an
//! open cell, and every visited cell closes permanently. A player who
//! cannot move on their turn loses.
//!
//! States are plain values: `apply` clones and never mutates. The board
//! fits in a `u128` bitmask, so cloning is trivially cheap.

use crate::core::{Action, Cell, PlayerId};
use crate::game::Position;

/// Board width in cells.
pub const WIDTH: usize = 11;
/// Board height in cells.
pub const HEIGHT: usize = 9;

const CELL_COUNT: usize = WIDTH * HEIGHT;
const FULL_BOARD: u128 = (1 << CELL_COUNT) - 1;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// A knight's Isolation position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Isolation {
    /// Bit set = cell still open.
    open: u128,
    /// Piece locations, `None` before placement.
    locs: [Option<Cell>; 2],
    /// Plies played so far.
    ply: u32,
}

impl Isolation {
    /// A fresh board with no pieces placed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: FULL_BOARD,
            locs: [None, None],
            ply: 0,
        }
    }

    /// Build a mid-game position directly.
    ///
    /// `open` bits outside the board are ignored. Used by tests and
    /// benchmarks to construct positions without replaying a game.
    #[must_use]
    pub fn from_parts(open: u128, locs: [Option<Cell>; 2], ply: u32) -> Self {
        Self {
            open: open & FULL_BOARD,
            locs,
            ply,
        }
    }

    /// Whether a cell is still open.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.open & (1 << cell.index()) != 0
    }

    /// Number of open cells remaining.
    #[must_use]
    pub fn open_count(&self) -> u32 {
        self.open.count_ones()
    }

    /// Iterate over all open cells.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..CELL_COUNT as u8)
            .map(Cell::new)
            .filter(move |c| self.is_open(*c))
    }

    /// Knight jumps from `cell` that stay on the board, open or not.
    fn knight_targets(cell: Cell) -> impl Iterator<Item = Cell> {
        let x = (cell.index() % WIDTH) as i32;
        let y = (cell.index() / WIDTH) as i32;
        KNIGHT_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            if (0..WIDTH as i32).contains(&nx) && (0..HEIGHT as i32).contains(&ny) {
                Some(Cell::new((ny as usize * WIDTH + nx as usize) as u8))
            } else {
                None
            }
        })
    }
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Position for Isolation {
    fn legal_actions(&self) -> Vec<Action> {
        self.liberties(self.location(self.active_player()))
    }

    fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        let dest = action.target();
        next.open &= !(1 << dest.index());
        next.locs[self.active_player().index()] = Some(dest);
        next.ply += 1;
        next
    }

    fn is_terminal(&self) -> bool {
        // The game cannot end during the placement phase.
        self.ply >= 2 && self.legal_actions().is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.is_terminal() {
            return 0.0;
        }
        // The active player is the one left without a move.
        if player == self.active_player() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn active_player(&self) -> PlayerId {
        PlayerId::new((self.ply % 2) as u8)
    }

    fn location(&self, player: PlayerId) -> Option<Cell> {
        self.locs[player.index()]
    }

    fn liberties(&self, location: Option<Cell>) -> Vec<Action> {
        match location {
            None => self.open_cells().map(Action::to).collect(),
            Some(cell) => Self::knight_targets(cell)
                .filter(|c| self.is_open(*c))
                .map(Action::to)
                .collect(),
        }
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }
}
