//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId): parents
//! hold no owning pointers to children and the back-reference is a plain
//! index, so the tree is trivially acyclic and torn down wholesale when
//! the search call ends.

use smallvec::SmallVec;

use crate::core::Action;
use crate::game::Position;

/// Index into the UctTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the UCT search tree.
///
/// `visits` starts at 1 when the node is created, before any
/// backpropagation increment, so the UCB1 formula never divides by zero.
#[derive(Clone, Debug)]
pub struct UctNode<S> {
    /// The game state this node represents.
    pub state: S,

    /// Parent node (NONE for root). Non-owning back-reference, used for
    /// backpropagation and for reading the parent's visit count.
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Simulations that passed through this node. Seeded to 1.
    pub visits: u32,

    /// Accumulated reward from backpropagation.
    pub reward: f64,

    /// Actions explored so far, parallel to `children`.
    pub actions: SmallVec<[Action; 8]>,

    /// Child nodes, one per explored action.
    pub children: SmallVec<[NodeId; 8]>,

    /// Legal actions of `state`, cached at creation.
    legal: Vec<Action>,
}

impl<S: Position> UctNode<S> {
    /// Create a new node wrapping `state`.
    pub fn new(state: S, parent: NodeId, depth: u16) -> Self {
        let legal = state.legal_actions();
        Self {
            state,
            parent,
            depth,
            visits: 1,
            reward: 0.0,
            actions: SmallVec::new(),
            children: SmallVec::new(),
            legal,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, NodeId::NONE, 0)
    }

    /// Legal actions of this node's state.
    #[must_use]
    pub fn legal_actions(&self) -> &[Action] {
        &self.legal
    }

    /// Check if every legal action has a child.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.actions.len() == self.legal.len()
    }

    /// Legal actions that do not have a child yet.
    #[must_use]
    pub fn untried_actions(&self) -> Vec<Action> {
        self.legal
            .iter()
            .filter(|a| !self.actions.contains(a))
            .copied()
            .collect()
    }

    /// Mean reward per visit.
    #[must_use]
    pub fn exploitation(&self) -> f64 {
        self.reward / self.visits as f64
    }
}
