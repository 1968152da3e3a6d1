//! Shared helpers for ArticleRep benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use articlerep_core::{Article, ArticleId};
use rand::Rng;

/// Builds an article with `width` random authors and `width` random
/// keywords drawn from a pool large enough to keep buckets shallow.
#[must_use]
pub fn wide_article(id: u32, width: usize) -> Article {
    let mut rng = rand::thread_rng();
    let authors: Vec<String> = (0..width)
        .map(|_| format!("author-{}", rng.gen_range(0..10_000)))
        .collect();
    let keywords: Vec<String> = (0..width)
        .map(|_| format!("keyword-{}", rng.gen_range(0..10_000)))
        .collect();
    Article::new(ArticleId::new(id), authors, keywords)
}
