//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The alternative strategy to MCTS: deterministic, exhaustive to a fixed
//! depth, with a liberty-difference heuristic at the frontier. Stack depth
//! equals search depth, which configuration bounds at 20, so plain
//! recursion is safe.

use crate::core::{Action, PlayerId};
use crate::game::Position;

/// Default depth limit for a full-depth search.
pub const DEFAULT_DEPTH: u32 = 20;

/// Minimax searcher with alpha-beta pruning.
///
/// Performs no randomization: given a fixed action-enumeration order the
/// result is fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaEngine;

impl AlphaBetaEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Find the action with the best worst-case outcome for `player`,
    /// searching `depth` plies.
    ///
    /// Ties favor the most recently found action. Returns `None` only
    /// when the position has no legal action.
    pub fn search<S: Position>(
        &self,
        state: &S,
        player: PlayerId,
        depth: u32,
    ) -> Option<(Action, f64)> {
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(Action, f64)> = None;

        for action in state.legal_actions() {
            let value = self.min_value(
                &state.apply(action),
                player,
                depth.saturating_sub(1),
                alpha,
                beta,
            );
            alpha = alpha.max(value);
            match best {
                Some((_, best_value)) if value < best_value => {}
                _ => best = Some((action, value)),
            }
        }

        if let Some((action, value)) = best {
            log::debug!("alphabeta: depth {} chose {} (value {})", depth, action, value);
        }
        best
    }

    /// Minimizing ply: the opponent picks the child worst for `player`.
    fn min_value<S: Position>(
        &self,
        state: &S,
        player: PlayerId,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> f64 {
        if state.is_terminal() {
            return state.utility(player);
        }
        if depth == 0 {
            return score(state, player);
        }

        let mut value = f64::INFINITY;
        for action in state.legal_actions() {
            value = value.min(self.max_value(&state.apply(action), player, depth - 1, alpha, beta));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    /// Maximizing ply: `player` picks the child best for themselves.
    fn max_value<S: Position>(
        &self,
        state: &S,
        player: PlayerId,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        if state.is_terminal() {
            return state.utility(player);
        }
        if depth == 0 {
            return score(state, player);
        }

        let mut value = f64::NEG_INFINITY;
        for action in state.legal_actions() {
            value = value.max(self.min_value(&state.apply(action), player, depth - 1, alpha, beta));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }
}

/// Static evaluation: `player`'s liberties minus the opponent's.
///
/// The only heuristic; terminal states are handled by the exact utility
/// branch before this is ever consulted.
pub fn score<S: Position>(state: &S, player: PlayerId) -> f64 {
    let own = state.liberties(state.location(player)).len() as f64;
    let opp = state.liberties(state.location(player.opponent())).len() as f64;
    own - opp
}
