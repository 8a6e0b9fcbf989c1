//! Query trees and the rewrites that canonicalize them.
//!
//! This module provides:
//! - Node types (substring, regex, AND, OR, NOT, constants, repo/branch/case)
//! - A one-level traversal primitive (`map`)
//! - Constant folding and associative flattening
//! - The `simplify` pipeline and its options
//! - A nesting-depth guard for untrusted input

mod case;
mod expression;
mod flatten;
mod fold;
mod limits;
mod map;
mod simplify;

// Re-export public types
pub use case::CaseFlavor;
pub use expression::{Query, QueryKind, Regexp, Substring};
pub use flatten::flatten;
pub use fold::fold_constants;
pub use limits::{check_depth, DEFAULT_MAX_QUERY_DEPTH};
pub use map::map;
pub use simplify::{simplify, simplify_with, SimplifyOptions};
