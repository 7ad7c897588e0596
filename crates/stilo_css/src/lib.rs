//! A recursive-descent PEG recognizer for CSS 2.x (plus media-query and
//! pseudo-element extensions) that folds match events into a flat
//! selector → property-set mapping.
//!
//! The grammar lives in [`grammar`] as a table of combinator descriptors;
//! [`matcher`] drives it over the input with ordered-choice backtracking and
//! journals committed matches; [`actions`] replays the journal into a
//! [`stylesheet::Stylesheet`] once the top rule has committed.

use crate::errors::ParseError;
use crate::matcher::Matcher;
use crate::parser_config::ParserConfig;
use crate::stylesheet::{SheetBuilder, Stylesheet};
use crate::symbol::Symbol;

mod actions;
pub mod errors;
pub mod grammar;
mod matcher;
pub mod parser_config;
pub mod rule;
pub mod stylesheet;
pub mod symbol;
pub mod walker;

pub struct Css2;

impl Css2 {
    /// Parse a CSS stylesheet from raw bytes.
    ///
    /// Returns the frozen stylesheet on success. Any unrecoverable failure
    /// (a `must` violation or an explicit raise) aborts the parse and comes
    /// back as the single diagnostic; there is no partial result.
    pub fn parse(data: &[u8], config: ParserConfig) -> Result<Stylesheet, ParseError> {
        let source = config.source.as_deref().unwrap_or("<inline>");
        log::debug!("parsing {} ({} bytes)", source, data.len());

        let mut matcher = Matcher::new(data, grammar::shared());
        let matched = matcher.run(Symbol::Stylesheet)?;
        if !matched {
            // the envelope ends in sor(eof, raise), so a plain failure
            // cannot normally reach here
            return Err(ParseError::new(
                "stylesheet",
                "unexpected input".to_string(),
                matcher.position(),
            ));
        }

        let mut builder = SheetBuilder::new();
        for event in matcher.journal() {
            let text = String::from_utf8_lossy(&data[event.start..event.end]);
            actions::dispatch(&mut builder, event.symbol, &text);
        }

        Ok(builder.finish())
    }

    /// Convenience wrapper over [`Css2::parse`] for string input.
    pub fn parse_str(data: &str, config: ParserConfig) -> Result<Stylesheet, ParseError> {
        Self::parse(data.as_bytes(), config)
    }
}
