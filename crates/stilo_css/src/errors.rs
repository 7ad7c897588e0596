//! Error results that can be returned from the css parser
use stilo_shared::byte_stream::{ByteCursor, Location};
use thiserror::Error;

/// An unrecoverable parse failure: either a `must`-wrapped rule did not
/// match, or the grammar hit an explicit raise. Recoverable match failures
/// never surface as this type; they are handled by backtracking.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("parse error: {message} at {location}")]
pub struct ParseError {
    /// Name of the rule that initiated the failure
    pub rule: &'static str,
    /// Error message
    pub message: String,
    /// Location of the error
    pub location: Location,
}

impl ParseError {
    pub fn new(rule: &'static str, message: String, location: Location) -> Self {
        Self {
            rule,
            message,
            location,
        }
    }

    /// Renders the offending source line with a caret under the failing
    /// column.
    pub fn snippet(&self, source: &[u8]) -> String {
        let line = ByteCursor::new(source).line_of(self.location);
        let pad = " ".repeat(self.location.column.saturating_sub(1));
        format!("{}\n{}^\n", String::from_utf8_lossy(line), pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ParseError::new(
            "declaration",
            "expected declaration".to_string(),
            Location::new(3, 7, 21),
        );
        assert_eq!(err.to_string(), "parse error: expected declaration at 3:7");
    }

    #[test]
    fn snippet_points_at_column() {
        let source = b"ab\ncdefgh\nij";
        let err = ParseError::new("x", "oops".to_string(), Location::new(2, 3, 6));
        assert_eq!(err.snippet(source), "cdefgh\n  ^\n");
    }

    #[test]
    fn snippet_on_first_line() {
        let source = b"p { color red }";
        let err = ParseError::new("x", "oops".to_string(), Location::new(1, 11, 10));
        assert_eq!(err.snippet(source), "p { color red }\n          ^\n");
    }
}
