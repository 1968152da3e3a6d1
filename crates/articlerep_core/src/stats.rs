//! Repository statistics.

use std::fmt;

/// Point-in-time counters for a repository.
///
/// Each counter is read under its own table's read lock, so the snapshot
/// carries the same caveat as multi-key lookups: the counters may reflect
/// slightly different points in time while mutators are running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepoStats {
    /// Number of articles in the id index.
    pub articles: usize,
    /// Number of distinct author names currently indexed.
    pub authors: usize,
    /// Number of distinct keywords currently indexed.
    pub keywords: usize,
    /// Number of author locks ever created (never shrinks).
    pub author_locks: usize,
    /// Number of keyword locks ever created (never shrinks).
    pub keyword_locks: usize,
}

impl fmt::Display for RepoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "articles: {}, authors: {}, keywords: {}, locks: {}+{}",
            self.articles, self.authors, self.keywords, self.author_locks, self.keyword_locks
        )
    }
}
