//! Structural errors reported by forest traversal.

use thiserror::Error;

/// Maximum nesting depth a forest may reach.
pub const MAX_DEPTH: u16 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The same id appears more than once in the forest.
    #[error("duplicate node id: {0}")]
    DuplicateId(String),
    /// Nesting deeper than [`MAX_DEPTH`].
    #[error("node {id} exceeds maximum tree depth {max}")]
    DepthExceeded { id: String, max: u16 },
}
