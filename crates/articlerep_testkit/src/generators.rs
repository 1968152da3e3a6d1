//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random articles and operation
//! sequences that respect the repository's construction contract (ids in
//! range, distinct keys within one article).

use articlerep_core::{Article, ArticleId};
use proptest::prelude::*;

/// Strategy for generating article ids below `capacity`.
pub fn article_id_strategy(capacity: u32) -> impl Strategy<Value = ArticleId> {
    (0..capacity).prop_map(ArticleId::new)
}

/// Strategy for generating author names.
pub fn author_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").expect("invalid regex")
}

/// Strategy for generating keywords.
pub fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").expect("invalid regex")
}

/// Strategy for generating whole articles with distinct key lists.
pub fn article_strategy(capacity: u32) -> impl Strategy<Value = Article> {
    (
        article_id_strategy(capacity),
        prop::collection::hash_set(author_strategy(), 0..4),
        prop::collection::hash_set(keyword_strategy(), 0..4),
    )
        .prop_map(|(id, authors, keywords)| Article::new(id, authors, keywords))
}

/// A single repository operation for sequence-based tests.
#[derive(Debug, Clone)]
pub enum RepoOperation {
    /// Insert an article.
    Insert(Article),
    /// Remove an article by id.
    Remove(ArticleId),
    /// Look up articles by a single author name.
    FindByAuthor(String),
    /// Look up articles by a single keyword.
    FindByKeyword(String),
}

/// Strategy for generating a single operation over a bounded id space.
pub fn operation_strategy(capacity: u32) -> impl Strategy<Value = RepoOperation> {
    prop_oneof![
        4 => article_strategy(capacity).prop_map(RepoOperation::Insert),
        2 => article_id_strategy(capacity).prop_map(RepoOperation::Remove),
        1 => author_strategy().prop_map(RepoOperation::FindByAuthor),
        1 => keyword_strategy().prop_map(RepoOperation::FindByKeyword),
    ]
}

/// Strategy for generating operation sequences.
pub fn operations_strategy(
    capacity: u32,
    max_len: usize,
) -> impl Strategy<Value = Vec<RepoOperation>> {
    prop::collection::vec(operation_strategy(capacity), 1..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use articlerep_core::Repository;

    proptest! {
        #[test]
        fn generated_articles_have_distinct_keys(article in article_strategy(64)) {
            let mut authors = article.authors().to_vec();
            authors.sort();
            authors.dedup();
            prop_assert_eq!(authors.len(), article.authors().len());

            let mut keywords = article.keywords().to_vec();
            keywords.sort();
            keywords.dedup();
            prop_assert_eq!(keywords.len(), article.keywords().len());
        }

        #[test]
        fn generated_ids_fit_the_repository(article in article_strategy(64)) {
            let repo = Repository::new(64).unwrap();
            prop_assert!(repo.insert_article(article).is_ok());
        }

        #[test]
        fn operation_sequences_keep_the_repository_valid(
            ops in operations_strategy(32, 48)
        ) {
            let repo = Repository::new(32).unwrap();
            for op in ops {
                match op {
                    RepoOperation::Insert(article) => {
                        repo.insert_article(article).unwrap();
                    }
                    RepoOperation::Remove(id) => {
                        repo.remove_article(id).unwrap();
                    }
                    RepoOperation::FindByAuthor(name) => {
                        repo.find_article_by_author(&[name]);
                    }
                    RepoOperation::FindByKeyword(keyword) => {
                        repo.find_article_by_keyword(&[keyword]);
                    }
                }
                prop_assert!(repo.validate());
            }
        }
    }
}
