//! Game-state capability interface consumed by the search engines.
//!
//! The rules engine proper — board geometry, legal-move generation, move
//! application, terminal detection — is an external collaborator. The
//! engines only see this trait. `games::isolation` provides a reference
//! implementation for tests and benchmarks.
//!
//! States are treated as immutable values: `apply` returns a new state and
//! never mutates one already referenced by a search node.

use crate::core::{Action, Cell, PlayerId};

/// A position in a two-player, zero-sum, perfect-information game.
///
/// ## Implementation Notes
///
/// - `legal_actions` is empty exactly at terminal states
/// - `apply` must be pure: same state + action, same result
/// - `utility` is only meaningful when `is_terminal` is true
/// - `liberties(None)` is the placement case: every open cell is reachable
pub trait Position: Clone {
    /// Enumerate legal actions for the active player, in a stable order.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action, producing a new state.
    fn apply(&self, action: Action) -> Self;

    /// Check whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Exact outcome for `player`, defined at terminal states.
    fn utility(&self, player: PlayerId) -> f64;

    /// Whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Where `player`'s piece stands, `None` before placement.
    fn location(&self, player: PlayerId) -> Option<Cell>;

    /// Moves reachable from a location ("liberties").
    ///
    /// `None` means the piece is unplaced and may go to any open cell.
    fn liberties(&self, location: Option<Cell>) -> Vec<Action>;

    /// Number of plies played so far.
    fn ply_count(&self) -> u32;
}
