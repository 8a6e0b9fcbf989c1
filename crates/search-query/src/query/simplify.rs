//! Query simplification pipeline.

use serde::{Deserialize, Serialize};

use super::expression::Query;
use super::flatten::flatten;
use super::fold::fold_constants;

/// Tuning for [`simplify_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    /// Hard cap on flattening passes, the final no-change pass included.
    /// `None` derives the cap from the folded tree's node count, which a
    /// correct flattener never reaches.
    pub max_flatten_passes: Option<usize>,
}

/// Rewrites `query` into its canonical form.
///
/// The pipeline:
/// 1. Fold constants once over the whole tree
/// 2. Flatten repeatedly until a pass reports no change
///
/// The result matches the same documents as the input, contains no AND
/// directly under AND, no OR directly under OR, no single-child AND/OR, and no
/// constants unless the whole query is one.
pub fn simplify(query: Query) -> Query {
    simplify_with(query, &SimplifyOptions::default())
}

/// [`simplify`] with explicit options.
pub fn simplify_with(query: Query, options: &SimplifyOptions) -> Query {
    let mut query = fold_constants(query);
    let folded_nodes = query.node_count();
    let max_passes = options
        .max_flatten_passes
        .unwrap_or_else(|| folded_nodes.saturating_add(1));

    let mut passes = 0usize;
    loop {
        if passes >= max_passes {
            log::warn!(
                "query flattening stopped after {} passes without reaching a fixpoint",
                passes
            );
            break;
        }
        let (next, changed) = flatten(query);
        query = next;
        passes += 1;
        log::trace!("flatten pass {}: changed={}", passes, changed);
        if !changed {
            break;
        }
    }

    log::debug!(
        "simplified query in {} flatten passes: {} -> {} nodes",
        passes,
        folded_nodes,
        query.node_count()
    );
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Query {
        Query::substring(s)
    }

    #[test]
    fn folds_then_flattens() {
        // (and TRUE (and a (or FALSE b))) -> (and a b)
        let query = Query::and([
            Query::constant(true),
            Query::and([text("a"), Query::or([Query::constant(false), text("b")])]),
        ]);
        assert_eq!(
            simplify(query).render(),
            r#"(and substr:"a" substr:"b")"#
        );
    }

    #[test]
    fn pass_cap_limits_flattening() {
        let query = Query::and([Query::and([Query::and([text("a"), text("b")])])]);
        let options = SimplifyOptions {
            max_flatten_passes: Some(1),
        };
        assert_eq!(
            simplify_with(query.clone(), &options).render(),
            r#"(and (and substr:"a" substr:"b"))"#
        );
        assert_eq!(
            simplify(query).render(),
            r#"(and substr:"a" substr:"b")"#
        );
    }

    #[test]
    fn zero_pass_cap_only_folds() {
        let options = SimplifyOptions {
            max_flatten_passes: Some(0),
        };
        let query = Query::and([Query::constant(true), text("a")]);
        assert_eq!(
            simplify_with(query, &options).render(),
            r#"(and substr:"a")"#
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let empty: SimplifyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SimplifyOptions::default());

        let capped: SimplifyOptions =
            serde_json::from_str(r#"{"max_flatten_passes": 4}"#).unwrap();
        assert_eq!(capped.max_flatten_passes, Some(4));
    }
}
