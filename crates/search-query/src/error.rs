#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Regex error: {0}")]
    Regex(#[from] regex_syntax::Error),

    #[error("Unknown case flavor: {0}")]
    UnknownCaseFlavor(String),

    #[error("Query nesting depth {depth} exceeds limit {max}")]
    TooDeep { depth: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, QueryError>;
