//! Nesting limits for untrusted query trees.
//!
//! Folding, flattening and rendering recurse once per tree level. Parsers
//! that build trees from user input should call [`check_depth`] before
//! handing the tree to [`simplify`](super::simplify).

use crate::error::{QueryError, Result};

use super::expression::Query;

/// Default maximum nesting depth accepted from a parser.
pub const DEFAULT_MAX_QUERY_DEPTH: usize = 256;

/// Fails with [`QueryError::TooDeep`] when `query` nests deeper than `max_depth`.
pub fn check_depth(query: &Query, max_depth: usize) -> Result<()> {
    let depth = query.depth();
    if depth > max_depth {
        return Err(QueryError::TooDeep {
            depth,
            max: max_depth,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_not(levels: usize) -> Query {
        (0..levels).fold(Query::substring("x"), |inner, _| Query::not(inner))
    }

    #[test]
    fn accepts_query_within_limit() {
        assert!(check_depth(&nested_not(3), 4).is_ok());
        assert!(check_depth(&Query::repo("r"), 1).is_ok());
        assert!(check_depth(&nested_not(100), DEFAULT_MAX_QUERY_DEPTH).is_ok());
    }

    #[test]
    fn rejects_query_over_limit() {
        match check_depth(&nested_not(10), 5) {
            Err(QueryError::TooDeep { depth, max }) => {
                assert_eq!(depth, 11);
                assert_eq!(max, 5);
            }
            other => panic!("Expected TooDeep, got {other:?}"),
        }
    }
}
