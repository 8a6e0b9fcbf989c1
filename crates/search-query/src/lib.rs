//! Boolean query trees for code search, and their simplification.
//!
//! This crate provides the query layer that sits between the parser and the
//! executor:
//! - Query node model (substring, regex, and/or/not, constants, scope leaves)
//! - Canonical textual rendering used for logs and test assertions
//! - Constant folding and associative flattening
//! - `simplify`, which rewrites a tree into its canonical form

pub mod error;
pub mod query;

// Re-export main types
pub use error::{QueryError, Result};
pub use query::{
    check_depth, flatten, fold_constants, map, simplify, simplify_with, CaseFlavor, Query,
    QueryKind, Regexp, SimplifyOptions, Substring, DEFAULT_MAX_QUERY_DEPTH,
};
