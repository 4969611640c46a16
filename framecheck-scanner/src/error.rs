use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Render an error followed by every error in its `source()` chain.
///
/// reqwest's top-level `Display` only says "error sending request", the
/// useful part (DNS failure, refused connection, certificate problem) lives
/// further down the chain.
pub fn error_chain(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = err.to_string();
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Error, Debug)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn test_error_chain_walks_sources() {
        let err = Outer(Inner);
        assert_eq!(error_chain(&err), "outer: inner");
    }

    #[test]
    fn test_error_chain_single() {
        let err = ScanError::InvalidUrl("nope".to_string());
        assert_eq!(error_chain(&err), "Invalid URL: nope");
    }
}
