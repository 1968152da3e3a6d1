//! The article record.

use crate::types::ArticleId;

/// An immutable article record: an id plus the author names and keywords
/// it is indexed under.
///
/// Articles carry no behavior of their own. The repository stores them as
/// `Arc<Article>` and compares entries by pointer identity, so two articles
/// with equal fields are still distinct index entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    authors: Vec<String>,
    keywords: Vec<String>,
}

impl Article {
    /// Creates a new article.
    ///
    /// Author names and keywords are expected to be distinct within their
    /// own list; duplicates would make the same article appear twice under
    /// one key.
    pub fn new<A, K>(id: ArticleId, authors: A, keywords: K) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            id,
            authors: authors.into_iter().map(Into::into).collect(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the article's id.
    #[must_use]
    pub const fn id(&self) -> ArticleId {
        self.id
    }

    /// Returns the author names this article is indexed under.
    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Returns the keywords this article is indexed under.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_and_access() {
        let article = Article::new(ArticleId::new(3), ["alice", "bob"], ["ml"]);
        assert_eq!(article.id(), ArticleId::new(3));
        assert_eq!(article.authors(), ["alice", "bob"]);
        assert_eq!(article.keywords(), ["ml"]);
    }

    #[test]
    fn empty_key_lists_allowed() {
        let article = Article::new(ArticleId::new(0), Vec::<String>::new(), Vec::<String>::new());
        assert!(article.authors().is_empty());
        assert!(article.keywords().is_empty());
    }
}
