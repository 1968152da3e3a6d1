//! Test fixtures and repository helpers.

use articlerep_core::{Article, ArticleId, Config, Repository};

/// Default id capacity for test repositories.
pub const TEST_CAPACITY: usize = 1_024;

/// Creates an empty repository sized for tests.
#[must_use]
pub fn test_repository() -> Repository {
    Repository::with_config(Config::new().capacity(TEST_CAPACITY).table_capacity(64))
        .expect("test capacity is non-zero")
}

/// Creates an article from string slices.
#[must_use]
pub fn sample_article(id: u32, authors: &[&str], keywords: &[&str]) -> Article {
    Article::new(
        ArticleId::new(id),
        authors.iter().copied(),
        keywords.iter().copied(),
    )
}

/// A small canned corpus with overlapping authors and keywords.
#[must_use]
pub fn sample_articles() -> Vec<Article> {
    vec![
        sample_article(1, &["alice"], &["ml"]),
        sample_article(2, &["alice", "bob"], &["db"]),
        sample_article(3, &["bob"], &["ml", "db"]),
        sample_article(4, &["carol"], &["os"]),
    ]
}

/// Creates a repository pre-populated with [`sample_articles`].
#[must_use]
pub fn populated_repository() -> Repository {
    let repo = test_repository();
    for article in sample_articles() {
        assert!(repo
            .insert_article(article)
            .expect("sample ids are in range"));
    }
    repo
}
