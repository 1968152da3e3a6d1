//! # ArticleRep Core
//!
//! Concurrent in-memory repository of article records, indexed
//! simultaneously by numeric id, by author name, and by keyword.
//!
//! This crate provides:
//! - Three independent indices (id, author, keyword) over shared articles
//! - Fine-grained per-key locking instead of a single global lock
//! - Insert, remove, and multi-key lookup operations
//! - A cross-index consistency validator for tests and diagnostics
//!
//! ## Example
//!
//! ```rust
//! use articlerep_core::{Article, ArticleId, Repository};
//!
//! let repo = Repository::new(1024)?;
//! repo.insert_article(Article::new(ArticleId::new(1), ["alice"], ["ml"]))?;
//!
//! let hits = repo.find_article_by_author(&["alice"]);
//! assert_eq!(hits.len(), 1);
//! assert!(repo.validate());
//! # Ok::<(), articlerep_core::RepoError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod config;
mod error;
mod locks;
mod repository;
mod stats;
mod types;

pub use article::Article;
pub use config::Config;
pub use error::{RepoError, RepoResult};
pub use repository::Repository;
pub use stats::RepoStats;
pub use types::ArticleId;
