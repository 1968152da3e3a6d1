//! Error types for ArticleRep core.

use crate::types::ArticleId;
use thiserror::Error;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors that can occur in repository operations.
///
/// Expected outcomes are not errors: a duplicate id on insert and a missing
/// id on remove are reported as `Ok(false)`. Only contract violations reach
/// this type.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Article id lies outside the configured dense id space.
    ///
    /// The per-id lock table is sized at construction and cannot address
    /// ids at or beyond its capacity.
    #[error("article id {id} out of capacity: repository supports ids in [0, {capacity})")]
    IdOutOfCapacity {
        /// The offending id.
        id: ArticleId,
        /// The configured capacity.
        capacity: usize,
    },

    /// Repository configured with a zero-sized id space.
    #[error("repository capacity must be non-zero")]
    ZeroCapacity,
}

impl RepoError {
    /// Creates an out-of-capacity error.
    pub fn id_out_of_capacity(id: ArticleId, capacity: usize) -> Self {
        Self::IdOutOfCapacity { id, capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_capacity_display() {
        let err = RepoError::id_out_of_capacity(ArticleId::new(99), 64);
        let msg = err.to_string();
        assert!(msg.contains("article:99"));
        assert!(msg.contains("[0, 64)"));
    }
}
