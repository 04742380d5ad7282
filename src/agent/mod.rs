//! Per-turn decision making.
//!
//! `DecisionAgent` is the glue between the external harness and the two
//! search engines: random openings for the first plies, then exactly one
//! engine per turn. Results go through an injected `ActionSink` so a
//! best-known answer is always available before the harness deadline,
//! even if the agent is interrupted.

pub mod sink;

pub use sink::{ActionSink, LatestAction};

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::alphabeta::{AlphaBetaEngine, DEFAULT_DEPTH};
use crate::core::{Action, AgentRng};
use crate::game::Position;
use crate::mcts::{MctsConfig, MctsEngine};

/// Which search engine decides a turn.
///
/// Exactly one runs per decision; they are never combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// UCT Monte Carlo Tree Search (the primary design).
    Mcts,
    /// Iterative-deepening alpha-beta, deadline-gated.
    AlphaBeta,
}

/// Agent configuration, injected at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Engine selection.
    pub strategy: Strategy,

    /// MCTS parameters (budget, exploration constant, seed). The time
    /// budget also gates the iterative-deepening loop.
    pub search: MctsConfig,

    /// Depth limit for the alpha-beta alternative.
    pub max_depth: u32,

    /// Play a uniformly random move while `ply_count` is below this.
    /// The opening offers no tree shape worth searching and speed
    /// matters most there.
    pub opening_plies: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Mcts,
            search: MctsConfig::default(),
            max_depth: DEFAULT_DEPTH,
            opening_plies: 2,
        }
    }
}

impl AgentConfig {
    /// Create a config with a custom strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a config with a custom time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.search.time_budget = budget;
        self
    }

    /// Create a config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.search.seed = seed;
        self
    }

    /// Create a config with a custom alpha-beta depth limit.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Per-turn decision maker.
///
/// Owns no state between turns beyond its RNG: every search call builds
/// and discards its own tree.
pub struct DecisionAgent {
    config: AgentConfig,
    rng: AgentRng,
}

impl DecisionAgent {
    /// Create a new agent seeded from the configuration.
    pub fn new(config: AgentConfig) -> Self {
        let rng = AgentRng::new(config.search.seed);
        Self { config, rng }
    }

    /// Decide the turn for `state`, publishing results into `sink`.
    ///
    /// Publishes nothing only when the position has no legal action.
    pub fn decide<S: Position>(&mut self, state: &S, sink: &mut dyn ActionSink) {
        let deadline = Instant::now() + self.config.search.time_budget;

        if state.ply_count() < self.config.opening_plies {
            let legal = state.legal_actions();
            if let Some(&action) = self.rng.choose(&legal) {
                sink.publish(action);
            }
            return;
        }

        match self.config.strategy {
            Strategy::Mcts => self.decide_mcts(state, deadline, sink),
            Strategy::AlphaBeta => self.decide_alphabeta(state, deadline, sink),
        }
    }

    /// Decide and return the final answer through a `LatestAction` slot.
    pub fn decide_action<S: Position>(&mut self, state: &S) -> Option<Action> {
        let mut slot = LatestAction::new();
        self.decide(state, &mut slot);
        slot.take()
    }

    fn decide_mcts<S: Position>(
        &mut self,
        state: &S,
        deadline: Instant,
        sink: &mut dyn ActionSink,
    ) {
        let mut engine = MctsEngine::with_rng(self.config.search.clone(), self.rng.fork());
        if let Some(action) = engine.search(state, deadline) {
            sink.publish(action);
        }
    }

    /// Iterative deepening: publish the best move of every completed
    /// depth, so an interrupt still finds the deepest finished answer.
    fn decide_alphabeta<S: Position>(
        &mut self,
        state: &S,
        deadline: Instant,
        sink: &mut dyn ActionSink,
    ) {
        let engine = AlphaBetaEngine::new();
        let player = state.active_player();

        for depth in 1..=self.config.max_depth {
            if Instant::now() >= deadline {
                log::debug!("alphabeta: deadline reached before depth {}", depth);
                break;
            }
            match engine.search(state, player, depth) {
                Some((action, _)) => sink.publish(action),
                None => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use crate::games::isolation::{Isolation, WIDTH};

    fn cell(x: usize, y: usize) -> Cell {
        Cell::new((y * WIDTH + x) as u8)
    }

    fn mask(cells: &[Cell]) -> u128 {
        cells.iter().fold(0u128, |m, c| m | (1 << c.index()))
    }

    fn small_position() -> Isolation {
        let p0 = cell(2, 2);
        let p1 = cell(8, 6);
        let open = mask(&[
            cell(3, 4),
            cell(4, 3),
            cell(0, 1),
            cell(7, 4),
            cell(6, 5),
            cell(10, 7),
        ]);
        Isolation::from_parts(open, [Some(p0), Some(p1)], 2)
    }

    fn fast_config() -> AgentConfig {
        AgentConfig::default().with_time_budget(Duration::from_millis(10))
    }

    #[test]
    fn test_opening_move_is_random_and_legal() {
        let state = Isolation::new();
        let mut agent = DecisionAgent::new(fast_config());

        let start = Instant::now();
        let action = agent.decide_action(&state);

        // Below the opening threshold no engine runs.
        assert!(state.legal_actions().contains(&action.unwrap()));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_opening_seeded_deterministic() {
        let state = Isolation::new();
        let mut agent1 = DecisionAgent::new(fast_config().with_seed(99));
        let mut agent2 = DecisionAgent::new(fast_config().with_seed(99));

        assert_eq!(agent1.decide_action(&state), agent2.decide_action(&state));
    }

    #[test]
    fn test_mcts_turn_publishes_legal_action() {
        let state = small_position();
        let mut agent = DecisionAgent::new(fast_config());

        let action = agent.decide_action(&state);
        assert!(state.legal_actions().contains(&action.unwrap()));
    }

    #[test]
    fn test_alphabeta_turn_publishes_legal_action() {
        let state = small_position();
        let mut agent =
            DecisionAgent::new(fast_config().with_strategy(Strategy::AlphaBeta));

        let action = agent.decide_action(&state);
        assert!(state.legal_actions().contains(&action.unwrap()));
    }

    #[test]
    fn test_alphabeta_publishes_per_depth() {
        struct CountingSink(u32, Option<Action>);
        impl ActionSink for CountingSink {
            fn publish(&mut self, action: Action) {
                self.0 += 1;
                self.1 = Some(action);
            }
        }

        let state = small_position();
        let config = AgentConfig::default()
            .with_strategy(Strategy::AlphaBeta)
            .with_max_depth(4)
            .with_time_budget(Duration::from_secs(5));
        let mut agent = DecisionAgent::new(config);

        let mut sink = CountingSink(0, None);
        agent.decide(&state, &mut sink);

        // One publication per completed depth.
        assert_eq!(sink.0, 4);
        assert!(state.legal_actions().contains(&sink.1.unwrap()));
    }

    #[test]
    fn test_terminal_state_publishes_nothing() {
        let p0 = cell(0, 0);
        let p1 = cell(10, 8);
        let state = Isolation::from_parts(0, [Some(p0), Some(p1)], 2);

        let mut agent = DecisionAgent::new(fast_config());
        assert_eq!(agent.decide_action(&state), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = AgentConfig::default().with_max_depth(8);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AgentConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.max_depth, 8);
        assert_eq!(deserialized.strategy, Strategy::Mcts);
    }
}
