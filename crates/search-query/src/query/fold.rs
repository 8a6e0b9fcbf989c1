//! Constant folding.
//!
//! A single bottom-up pass that replaces statically decided subtrees with
//! `TRUE`/`FALSE`:
//! - Empty substrings and empty-match regexes become `TRUE`
//! - `NOT` of a constant is inverted
//! - Neutral constants are dropped from AND/OR, dominating ones short-circuit
//! - An AND/OR left without children becomes its identity constant

use super::expression::Query;

/// Folds constants out of `query`. Each node is visited exactly once.
pub fn fold_constants(query: Query) -> Query {
    match query {
        Query::And(children) => fold_junction(true, children),
        Query::Or(children) => fold_junction(false, children),
        Query::Not(child) => match fold_constants(*child) {
            Query::Const(value) => Query::Const(!value),
            folded => Query::Not(Box::new(folded)),
        },
        Query::Substring(substring) if substring.pattern.is_empty() => Query::Const(true),
        Query::Regexp(regexp) if regexp.matches_empty_unconditionally() => Query::Const(true),
        other => other,
    }
}

// `TRUE` is neutral for AND and `FALSE` for OR; the opposite constant decides
// the whole node.
fn fold_junction(is_and: bool, children: Vec<Query>) -> Query {
    let folded = children.into_iter().map(fold_constants).collect::<Vec<_>>();

    let mut kept = Vec::with_capacity(folded.len());
    for child in folded {
        match child.as_const() {
            Some(value) if value == is_and => continue,
            Some(value) => return Query::Const(value),
            None => kept.push(child),
        }
    }

    if kept.is_empty() {
        return Query::Const(is_and);
    }
    Query::junction(is_and, kept)
}
