//! Core UCT search algorithm.
//!
//! Repeats the four-phase loop — select, expand, simulate, backpropagate —
//! until a wall-clock deadline, then picks the root child under the same
//! UCB1 comparator used during selection. The deadline is polled once per
//! iteration; an in-flight rollout always runs to completion, so the
//! contract is soft real-time.

use std::time::Instant;

use crate::core::{Action, AgentRng};
use crate::game::Position;

use super::config::MctsConfig;
use super::node::{NodeId, UctNode};
use super::stats::SearchStats;
use super::tree::UctTree;

/// Main MCTS search engine.
///
/// Owns configuration, RNG, and statistics. Each `search` call builds a
/// fresh tree and discards it on return; nothing is cached across turns.
pub struct MctsEngine {
    config: MctsConfig,
    rng: AgentRng,
    stats: SearchStats,
}

impl MctsEngine {
    /// Create a new engine seeded from the configuration.
    pub fn new(config: MctsConfig) -> Self {
        let rng = AgentRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Create an engine with an externally provided RNG.
    ///
    /// Used by the agent to fork its own RNG per turn, so consecutive
    /// searches with one seed do not replay identical rollouts.
    pub fn with_rng(config: MctsConfig, rng: AgentRng) -> Self {
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Run UCT search until `deadline`, returning a legal action.
    ///
    /// Returns `None` only when the state has no legal action at all
    /// (terminal root). If the budget is already exhausted, falls back to
    /// a uniformly random legal action.
    pub fn search<S: Position>(&mut self, state: &S, deadline: Instant) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        let legal = state.legal_actions();
        if state.is_terminal() || legal.is_empty() {
            return self.rng.choose(&legal).copied();
        }

        let mut tree = UctTree::new(state.clone());
        while Instant::now() < deadline {
            self.iterate(&mut tree);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        let action = self
            .decide(&tree)
            .or_else(|| self.rng.choose(&legal).copied());

        log::debug!(
            "mcts: {} iterations, {} nodes, depth {}, chose {:?}",
            self.stats.iterations,
            tree.len(),
            self.stats.max_depth,
            action
        );
        action
    }

    /// Run a fixed number of iterations instead of a deadline.
    ///
    /// Deterministic for a given seed; used by tests and benchmarks.
    pub fn search_iterations<S: Position>(&mut self, state: &S, iterations: u32) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        let legal = state.legal_actions();
        if state.is_terminal() || legal.is_empty() {
            return self.rng.choose(&legal).copied();
        }

        let mut tree = UctTree::new(state.clone());
        for _ in 0..iterations {
            self.iterate(&mut tree);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.decide(&tree)
            .or_else(|| self.rng.choose(&legal).copied())
    }

    /// Single iteration: select+expand, simulate, backpropagate.
    fn iterate<S: Position>(&mut self, tree: &mut UctTree<S>) {
        let leaf = self.tree_policy(tree);
        let reward = self.default_policy(tree.get(leaf).state.clone());
        Self::backpropagate(tree, leaf, reward);
        self.stats.iterations += 1;
    }

    /// Select a leaf: descend by best child while fully expanded, expand
    /// one untried action at the first node that is not.
    fn tree_policy<S: Position>(&mut self, tree: &mut UctTree<S>) -> NodeId {
        let mut id = tree.root();
        while !tree.get(id).state.is_terminal() {
            if !tree.get(id).is_expanded() {
                return self.expand(tree, id);
            }
            id = self.best_child(tree, id);
        }
        id
    }

    /// Attach a child for one untried action, chosen uniformly at random.
    fn expand<S: Position>(&mut self, tree: &mut UctTree<S>, id: NodeId) -> NodeId {
        let untried = tree.get(id).untried_actions();
        let action = match self.rng.choose(&untried) {
            Some(&a) => a,
            None => return id,
        };

        let child_state = tree.get(id).state.apply(action);
        let depth = tree.get(id).depth + 1;
        let child = tree.alloc(UctNode::new(child_state, id, depth));

        let node = tree.get_mut(id);
        node.actions.push(action);
        node.children.push(child);

        self.stats.nodes_expanded += 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
        child
    }

    /// Child maximizing `reward/visits + c * sqrt(ln(parent.visits) / visits)`.
    ///
    /// Ties break to the first maximal child. Every node carries at least
    /// one visit, so the formula is total. Callers guarantee the node has
    /// children.
    fn best_child<S: Position>(&self, tree: &UctTree<S>, id: NodeId) -> NodeId {
        let node = tree.get(id);
        let ln_parent = (node.visits as f64).ln();
        let c = self.config.exploration_constant;

        let mut best = node.children[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &node.children {
            let child = tree.get(child_id);
            let exploration = (ln_parent / child.visits as f64).sqrt();
            let score = child.exploitation() + c * exploration;
            if score > best_score {
                best_score = score;
                best = child_id;
            }
        }
        best
    }

    /// Random playout from `state` to a terminal state.
    ///
    /// Reward is from the leaf's own perspective: -1 if the player to move
    /// at the leaf still has liberties in the terminal state, +1 if they
    /// do not. Sign parity here pairs with the negation in
    /// `backpropagate`; changing either alone produces an agent that
    /// consistently plays its worst move.
    fn default_policy<S: Position>(&mut self, mut state: S) -> f64 {
        let player = state.active_player();
        while !state.is_terminal() {
            let actions = state.legal_actions();
            match self.rng.choose(&actions) {
                Some(&action) => state = state.apply(action),
                None => break,
            }
        }
        self.stats.simulations += 1;

        if state.liberties(state.location(player)).is_empty() {
            1.0
        } else {
            -1.0
        }
    }

    /// Add the reward along the path from leaf to root, negating per ply.
    fn backpropagate<S: Position>(tree: &mut UctTree<S>, leaf: NodeId, mut reward: f64) {
        let mut id = leaf;
        while !id.is_none() {
            let node = tree.get_mut(id);
            node.reward += reward;
            node.visits += 1;
            reward = -reward;
            id = node.parent;
        }
    }

    /// Final decision: best root child under the selection comparator.
    fn decide<S: Position>(&self, tree: &UctTree<S>) -> Option<Action> {
        let root = tree.root_node();
        if root.children.is_empty() {
            return None;
        }
        let best = self.best_child(tree, tree.root());
        let idx = root.children.iter().position(|&c| c == best)?;
        Some(root.actions[idx])
    }

    /// Get search statistics for the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}
