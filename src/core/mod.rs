//! Core value types: players, cells, actions, RNG.
//!
//! These are the fundamental building blocks shared by every engine.
//! Everything here is a small Copy value or a seedable RNG wrapper; the
//! game rules themselves live behind the `game::Position` trait.

pub mod action;
pub mod player;
pub mod rng;

pub use action::{Action, Cell};
pub use player::PlayerId;
pub use rng::AgentRng;
