//! Associative flattening of AND/OR trees.
//!
//! One pass applies these rewrites and reports whether anything changed:
//! - Unwraps single-item AND/OR wrappers
//! - Splices nested AND into AND and nested OR into OR
//!
//! A single pass does not always reach the flat form (an unwrapped child is
//! not revisited in the same pass), so `simplify` repeats it until a pass
//! reports no change. Every pass that reports a change removes at least one
//! AND/OR node.

use super::expression::{Query, QueryKind};

/// Runs one flattening pass over `query`.
pub fn flatten(query: Query) -> (Query, bool) {
    match query {
        Query::And(children) => flatten_junction(true, children),
        Query::Or(children) => flatten_junction(false, children),
        Query::Not(child) => {
            let (child, changed) = flatten(*child);
            (Query::Not(Box::new(child)), changed)
        }
        other => (other, false),
    }
}

fn flatten_junction(is_and: bool, children: Vec<Query>) -> (Query, bool) {
    let children = match <[Query; 1]>::try_from(children) {
        Ok([only]) => return (only, true),
        Err(children) => children,
    };

    let kind = if is_and { QueryKind::And } else { QueryKind::Or };
    let mut changed = false;
    let mut flattened = Vec::with_capacity(children.len());

    for child in children {
        let (child, child_changed) = flatten(child);
        changed |= child_changed;
        if child.kind() == kind {
            changed = true;
            flattened.extend(child.into_children());
        } else {
            flattened.push(child);
        }
    }

    (Query::junction(is_and, flattened), changed)
}
