use crate::entry::Key;
use thiserror::Error;

/// A structural invariant of the tree that failed to hold during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Two keys are out of order in an in-order traversal.
    #[error("key {next} follows key {previous} in an in-order traversal")]
    UnorderedKeys { previous: Key, next: Key },
    /// The root of the tree is red.
    #[error("root with key {key} is red")]
    RedRoot { key: Key },
    /// A node has a red right child but no red left child.
    #[error("node with key {key} leans right")]
    RightLeaningRed { key: Key },
    /// A red node has a red child.
    #[error("red node with key {key} has a red child")]
    ConsecutiveReds { key: Key },
    /// The subtrees of a node have different black heights.
    #[error("node with key {key} has black heights {left} (left) and {right} (right)")]
    UnbalancedBlackHeight { key: Key, left: usize, right: usize },
}

/// Convenience alias for results of tree validation.
pub type Result<T> = std::result::Result<T, TreeError>;
