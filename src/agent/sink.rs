//! Action publishing seam between the agent and the invoking harness.

use crate::core::Action;

/// Receives the agent's best-known answer.
///
/// Injected into `DecisionAgent::decide` so the harness controls where
/// results go. Publishing may happen more than once per turn (iterative
/// deepening); later publications supersede earlier ones.
pub trait ActionSink {
    /// Publish the best action found so far.
    fn publish(&mut self, action: Action);
}

/// Publish-and-overwrite slot.
///
/// A reader always sees the latest complete result; intermediate answers
/// are silently replaced.
#[derive(Clone, Debug, Default)]
pub struct LatestAction {
    latest: Option<Action>,
}

impl LatestAction {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published action, if any.
    #[must_use]
    pub fn get(&self) -> Option<Action> {
        self.latest
    }

    /// Take the most recently published action, emptying the slot.
    pub fn take(&mut self) -> Option<Action> {
        self.latest.take()
    }
}

impl ActionSink for LatestAction {
    fn publish(&mut self, action: Action) {
        self.latest = Some(action);
    }
}
