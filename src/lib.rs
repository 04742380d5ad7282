//! # isolation-agent
//!
//! A time-bounded decision engine for knight's Isolation: a two-player,
//! zero-sum, perfect-information pursuit/blocking game. Given a position
//! and a wall-clock budget, the agent returns one legal action judged best
//! for the player to move.
//!
//! ## Design Principles
//!
//! 1. **Anytime**: a legal answer is always available before the harness
//!    deadline; intermediate results are published and overwritten.
//!
//! 2. **Injected configuration**: time budgets, depth limits, and RNG
//!    seeds are passed in at construction, never read from globals, so
//!    tests can pin them deterministically.
//!
//! 3. **States are values**: `Position::apply` returns a new state; a
//!    state referenced by a search node is never mutated.
//!
//! ## Architecture
//!
//! - **UCT MCTS**: arena-based tree, UCB1 selection, random rollouts,
//!   sign-alternating backpropagation, deadline polled once per iteration.
//!
//! - **Alpha-beta**: depth-limited minimax with pruning and a
//!   liberty-difference heuristic; the interchangeable alternative
//!   strategy, run as iterative deepening under the same deadline.
//!
//! - **Single-threaded**: each search call owns its tree exclusively and
//!   drops it on return; no cross-turn caching.
//!
//! ## Modules
//!
//! - `core`: player IDs, cells, actions, deterministic RNG
//! - `game`: the `Position` capability trait the engines consume
//! - `games`: reference knight's Isolation board for tests and benches
//! - `mcts`: Monte Carlo Tree Search engine
//! - `alphabeta`: minimax engine with alpha-beta pruning
//! - `agent`: per-turn orchestration and result publishing

pub mod agent;
pub mod alphabeta;
pub mod core;
pub mod game;
pub mod games;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{Action, AgentRng, Cell, PlayerId};

pub use crate::game::Position;

pub use crate::mcts::{MctsConfig, MctsEngine, NodeId, SearchStats, UctNode, UctTree};

pub use crate::alphabeta::{score, AlphaBetaEngine};

pub use crate::agent::{ActionSink, AgentConfig, DecisionAgent, LatestAction, Strategy};
