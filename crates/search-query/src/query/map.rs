//! One-level traversal primitive.

use super::expression::Query;

/// Applies `f` one level down.
///
/// For AND/OR, `f` is applied to every child (order and count preserved) and
/// a new node of the same kind is returned. For NOT, `f` is applied to the
/// child. Every other node is passed to `f` directly. `f` is never applied to
/// an AND/OR/NOT node itself and the function does not recurse; callers that
/// want a full-tree rewrite call `map` again from inside `f`.
pub fn map<F>(query: Query, mut f: F) -> Query
where
    F: FnMut(Query) -> Query,
{
    match query {
        Query::And(children) => Query::And(children.into_iter().map(&mut f).collect()),
        Query::Or(children) => Query::Or(children.into_iter().map(&mut f).collect()),
        Query::Not(child) => Query::Not(Box::new(f(*child))),
        leaf => f(leaf),
    }
}
