//! Monte Carlo Tree Search with UCT selection.
//!
//! ## Overview
//!
//! Classic single-threaded UCT under a wall-clock deadline:
//!
//! - **Tree policy**: descend by UCB1, expanding one random untried action
//!   at the first node that is not fully expanded
//! - **Default policy**: uniformly random playout to a terminal state
//! - **Backpropagation**: sign-alternating reward from leaf to root
//! - **Anytime**: the deadline is polled once per iteration; a legal
//!   answer is available even when no iteration completed
//!
//! ## Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use isolation_agent::games::Isolation;
//! use isolation_agent::mcts::{MctsConfig, MctsEngine};
//! use isolation_agent::game::Position;
//! use isolation_agent::core::{Action, Cell};
//!
//! let state = Isolation::new()
//!     .apply(Action::to(Cell::new(0)))
//!     .apply(Action::to(Cell::new(60)));
//!
//! let mut engine = MctsEngine::new(MctsConfig::default());
//! let deadline = Instant::now() + Duration::from_millis(10);
//! let action = engine.search(&state, deadline);
//! assert!(action.is_some());
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MctsConfig;
pub use node::{NodeId, UctNode};
pub use search::MctsEngine;
pub use stats::SearchStats;
pub use tree::UctTree;
