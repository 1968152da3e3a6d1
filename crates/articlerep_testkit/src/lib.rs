//! # ArticleRep Testkit
//!
//! Test utilities for ArticleRep.
//!
//! This crate provides:
//! - Test fixtures and repository helpers
//! - Property-based test generators using proptest
//! - Stress testing utilities for concurrent workloads
//!
//! ## Usage
//!
//! ```rust,ignore
//! use articlerep_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_repository() {
//!     let repo = test_repository();
//!     // ... test operations
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
