//! Reference game implementations.

pub mod isolation;

pub use isolation::Isolation;
