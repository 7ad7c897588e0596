//! The parser driver: interprets [`Rule`] descriptors against a byte cursor.
//!
//! Every match function upholds one invariant: a return of `Ok(false)` means
//! the cursor and the event journal are exactly as they were on entry. Leaf
//! rules fail without consuming; composite rules save a mark and the journal
//! depth on entry and restore both on failure. Because of this, `sor` can try
//! its alternatives back to back, and actions recorded inside a failed
//! alternative never replay (the deferred-actions strategy).

use crate::errors::ParseError;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;
use stilo_shared::byte_stream::{ByteCursor, Location};

/// A committed match of an action-bearing symbol: the symbol plus the byte
/// span of the matched text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchEvent {
    pub symbol: Symbol,
    pub start: usize,
    pub end: usize,
}

pub struct Matcher<'input, 'grammar> {
    cursor: ByteCursor<'input>,
    grammar: &'grammar Grammar,
    journal: Vec<MatchEvent>,
    /// Named rules currently being matched; the innermost names `must`
    /// failures.
    scope: Vec<Symbol>,
}

impl<'input, 'grammar> Matcher<'input, 'grammar> {
    pub fn new(input: &'input [u8], grammar: &'grammar Grammar) -> Self {
        Self {
            cursor: ByteCursor::new(input),
            grammar,
            journal: Vec::new(),
            scope: Vec::new(),
        }
    }

    /// Match the named rule at the current position.
    pub fn run(&mut self, symbol: Symbol) -> Result<bool, ParseError> {
        self.match_rule(&Rule::Sym(symbol))
    }

    /// Committed match events, in post-order of rule completion.
    pub fn journal(&self) -> &[MatchEvent] {
        &self.journal
    }

    pub fn position(&self) -> Location {
        self.cursor.position()
    }

    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    fn match_rule(&mut self, rule: &Rule) -> Result<bool, ParseError> {
        match rule {
            Rule::Literal(bytes) => {
                if self.cursor.starts_with(bytes) {
                    self.cursor.advance(bytes.len());
                    Ok(true)
                } else {
                    Ok(false)
                }
            }

            Rule::ILiteral(bytes) => {
                if self.cursor.starts_with_ignore_ascii_case(bytes) {
                    self.cursor.advance(bytes.len());
                    Ok(true)
                } else {
                    Ok(false)
                }
            }

            Rule::OneOf(set) => self.match_char(|ch| set.contains(ch)),
            Rule::NotOne(set) => self.match_char(|ch| !set.contains(ch)),
            Rule::Range(lo, hi) => self.match_char(|ch| *lo <= ch && ch <= *hi),
            Rule::Ranges(pairs) => {
                self.match_char(|ch| pairs.iter().any(|&(lo, hi)| lo <= ch && ch <= hi))
            }
            Rule::WhiteSpace => self.match_char(char::is_whitespace),
            Rule::Any => self.match_char(|_| true),

            Rule::Eof => Ok(self.cursor.at_end()),

            Rule::Seq(rules) => {
                let mark = self.cursor.mark();
                let depth = self.journal.len();
                for r in rules {
                    if !self.match_rule(r)? {
                        self.cursor.rewind(mark);
                        self.journal.truncate(depth);
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Rule::Sor(rules) => {
                for r in rules {
                    if self.match_rule(r)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Rule::Opt(inner) => {
                self.match_rule(inner)?;
                Ok(true)
            }

            Rule::Star(inner) => {
                loop {
                    let before = self.cursor.position().offset;
                    if !self.match_rule(inner)? || self.cursor.position().offset == before {
                        // a successful zero-width match would loop forever
                        break;
                    }
                }
                Ok(true)
            }

            Rule::Plus(inner) => {
                if !self.match_rule(inner)? {
                    return Ok(false);
                }
                loop {
                    let before = self.cursor.position().offset;
                    if !self.match_rule(inner)? || self.cursor.position().offset == before {
                        break;
                    }
                }
                Ok(true)
            }

            Rule::Rep { min, max, rule } => {
                let mark = self.cursor.mark();
                let depth = self.journal.len();
                let mut count = 0;
                while count < *max {
                    let before = self.cursor.position().offset;
                    if !self.match_rule(rule)? {
                        break;
                    }
                    count += 1;
                    if self.cursor.position().offset == before {
                        break;
                    }
                }
                if count >= *min {
                    Ok(true)
                } else {
                    self.cursor.rewind(mark);
                    self.journal.truncate(depth);
                    Ok(false)
                }
            }

            Rule::Until { term, body } => {
                let mark = self.cursor.mark();
                let depth = self.journal.len();
                loop {
                    if self.match_rule(term)? {
                        return Ok(true);
                    }
                    let before = self.cursor.position().offset;
                    if !self.match_rule(body)? || self.cursor.position().offset == before {
                        self.cursor.rewind(mark);
                        self.journal.truncate(depth);
                        return Ok(false);
                    }
                }
            }

            Rule::Minus { rule, excluded } => {
                let mark = self.cursor.mark();
                let depth = self.journal.len();
                if !self.match_rule(rule)? {
                    return Ok(false);
                }
                let matched = self.cursor.slice(&mark);
                let mut probe = Matcher::new(matched, self.grammar);
                // an error inside the probe just means the exclusion does
                // not apply
                let rejected =
                    matches!(probe.match_rule(excluded), Ok(true)) && probe.cursor.at_end();
                if rejected {
                    self.cursor.rewind(mark);
                    self.journal.truncate(depth);
                    Ok(false)
                } else {
                    Ok(true)
                }
            }

            Rule::Must(inner) => {
                if self.match_rule(inner)? {
                    Ok(true)
                } else {
                    let rule_name = self.scope.last().map_or("input", |s| s.name());
                    Err(ParseError::new(
                        rule_name,
                        format!("expected {rule_name}"),
                        self.cursor.position(),
                    ))
                }
            }

            Rule::Raise(name) => Err(ParseError::new(
                name,
                name.replace('_', " "),
                self.cursor.position(),
            )),

            Rule::Sym(symbol) => {
                let grammar = self.grammar;
                let rule = grammar.rule(*symbol);
                log::trace!("try {} at {}", symbol.name(), self.cursor.position());
                let start = self.cursor.position().offset;
                self.scope.push(*symbol);
                let result = self.match_rule(rule);
                self.scope.pop();
                if let Ok(true) = result {
                    if crate::actions::wants(*symbol) {
                        self.journal.push(MatchEvent {
                            symbol: *symbol,
                            start,
                            end: self.cursor.position().offset,
                        });
                    }
                }
                result
            }
        }
    }

    fn match_char(&mut self, accept: impl Fn(char) -> bool) -> Result<bool, ParseError> {
        match self.cursor.peek_char() {
            Some((ch, width)) if accept(ch) => {
                self.cursor.advance(width);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Test helper: match a named rule against the full input, returning how
/// many bytes it consumed.
#[cfg(test)]
pub(crate) fn probe(symbol: Symbol, input: &str) -> Result<Option<usize>, ParseError> {
    let mut matcher = Matcher::new(input.as_bytes(), crate::grammar::shared());
    Ok(if matcher.run(symbol)? {
        Some(matcher.position().offset)
    } else {
        None
    })
}
