//! Crate-level error types.
//!
//! The per-frame core never fails; only the edges that touch the filesystem
//! or parse external documents return these.

use std::fmt;

/// Errors produced by the marigold crate.
#[derive(Debug)]
pub enum MarigoldError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Recorded session replay could not be decoded.
    Replay(String),
}

impl fmt::Display for MarigoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Replay(msg) => write!(f, "replay decode error: {msg}"),
        }
    }
}

impl std::error::Error for MarigoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MarigoldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = MarigoldError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing preset");
    }

    #[test]
    fn parse_errors_have_no_source() {
        let err = MarigoldError::OptionsParse("bad key".into());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "options parse error: bad key");
    }
}
