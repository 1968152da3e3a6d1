//! Core type definitions for ArticleRep.

use std::fmt;

/// Unique identifier for an article.
///
/// Article IDs are dense non-negative integers: a repository created with
/// capacity `N` accepts ids in `[0, N)` and addresses its per-id lock slots
/// directly by the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(pub u32);

impl ArticleId {
    /// Creates a new article ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the ID as a lock-slot index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "article:{}", self.0)
    }
}

impl From<u32> for ArticleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_ordering() {
        let a = ArticleId::new(1);
        let b = ArticleId::new(2);
        assert!(a < b);
    }

    #[test]
    fn article_id_display() {
        let id = ArticleId::new(42);
        assert_eq!(format!("{id}"), "article:42");
    }

    #[test]
    fn article_id_from_u32() {
        let id: ArticleId = 7u32.into();
        assert_eq!(id.as_usize(), 7);
    }
}
