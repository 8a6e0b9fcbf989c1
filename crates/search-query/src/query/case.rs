//! Case-sensitivity directive vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Flavor of a `case:` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseFlavor {
    Yes,
    No,
    Auto,
}

impl CaseFlavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for CaseFlavor {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "auto" => Ok(Self::Auto),
            _ => Err(QueryError::UnknownCaseFlavor(raw.to_string())),
        }
    }
}

impl fmt::Display for CaseFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_flavors() {
        assert_eq!("yes".parse::<CaseFlavor>().unwrap(), CaseFlavor::Yes);
        assert_eq!("NO".parse::<CaseFlavor>().unwrap(), CaseFlavor::No);
        assert_eq!("auto".parse::<CaseFlavor>().unwrap(), CaseFlavor::Auto);
    }

    #[test]
    fn rejects_unknown_flavor() {
        match "sometimes".parse::<CaseFlavor>() {
            Err(QueryError::UnknownCaseFlavor(raw)) => assert_eq!(raw, "sometimes"),
            other => panic!("Expected UnknownCaseFlavor, got {other:?}"),
        }
    }
}
