use crate::symbol::Symbol;

/// A recognizer descriptor.
///
/// The grammar is a table of these; the matcher interprets them against a
/// byte cursor. A rule either consumes input and succeeds, or fails and
/// leaves the cursor where it was. `Sym` is the indirection through the
/// grammar table that gives rules names and makes recursion possible.
#[derive(Debug)]
pub enum Rule {
    /// A fixed byte sequence, case-sensitive.
    Literal(&'static [u8]),
    /// A fixed byte sequence, case-insensitive over ASCII letters.
    ILiteral(&'static [u8]),
    /// One code point from the given set.
    OneOf(&'static str),
    /// One code point outside the given set.
    NotOne(&'static str),
    /// One code point in the inclusive range.
    Range(char, char),
    /// One code point in any of the inclusive ranges.
    Ranges(&'static [(char, char)]),
    /// One Unicode white-space code point.
    WhiteSpace,
    /// Any single code point; fails only at end of input.
    Any,
    /// Matches only at end of input, consuming nothing.
    Eof,
    /// All rules in order; rewinds on failure of any.
    Seq(Vec<Rule>),
    /// Ordered choice: first alternative to succeed wins.
    Sor(Vec<Rule>),
    /// Optional rule; always succeeds.
    Opt(Box<Rule>),
    /// Zero or more, greedy.
    Star(Box<Rule>),
    /// One or more, greedy.
    Plus(Box<Rule>),
    /// Between min and max repetitions, greedy.
    Rep {
        min: usize,
        max: usize,
        rule: Box<Rule>,
    },
    /// Repeat `body` until `term` matches; `term` is consumed.
    Until { term: Box<Rule>, body: Box<Rule> },
    /// Match `rule`, then reject when the matched text is itself a complete
    /// match of `excluded`.
    Minus {
        rule: Box<Rule>,
        excluded: Box<Rule>,
    },
    /// Like the inner rule, but failure is promoted to a parse error; no
    /// backtracking happens across this point.
    Must(Box<Rule>),
    /// Unconditionally fail with a named parse error.
    Raise(&'static str),
    /// A reference to a named rule in the grammar table.
    Sym(Symbol),
}

pub fn lit(text: &'static str) -> Rule {
    Rule::Literal(text.as_bytes())
}

pub fn ilit(text: &'static str) -> Rule {
    Rule::ILiteral(text.as_bytes())
}

pub fn one_of(set: &'static str) -> Rule {
    Rule::OneOf(set)
}

pub fn not_one(set: &'static str) -> Rule {
    Rule::NotOne(set)
}

pub fn range(lo: char, hi: char) -> Rule {
    Rule::Range(lo, hi)
}

pub fn ranges(pairs: &'static [(char, char)]) -> Rule {
    Rule::Ranges(pairs)
}

pub fn white_space() -> Rule {
    Rule::WhiteSpace
}

pub fn any() -> Rule {
    Rule::Any
}

pub fn eof() -> Rule {
    Rule::Eof
}

pub fn seq(rules: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::Seq(rules.into_iter().collect())
}

pub fn sor(rules: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::Sor(rules.into_iter().collect())
}

pub fn opt(rule: Rule) -> Rule {
    Rule::Opt(Box::new(rule))
}

pub fn star(rule: Rule) -> Rule {
    Rule::Star(Box::new(rule))
}

pub fn plus(rule: Rule) -> Rule {
    Rule::Plus(Box::new(rule))
}

pub fn rep(min: usize, max: usize, rule: Rule) -> Rule {
    Rule::Rep {
        min,
        max,
        rule: Box::new(rule),
    }
}

/// `until(term)` consumes arbitrary code points until `term` matches.
pub fn until(term: Rule) -> Rule {
    until_body(term, any())
}

pub fn until_body(term: Rule, body: Rule) -> Rule {
    Rule::Until {
        term: Box::new(term),
        body: Box::new(body),
    }
}

pub fn minus(rule: Rule, excluded: Rule) -> Rule {
    Rule::Minus {
        rule: Box::new(rule),
        excluded: Box::new(excluded),
    }
}

pub fn must(rule: Rule) -> Rule {
    Rule::Must(Box::new(rule))
}

pub fn raise(name: &'static str) -> Rule {
    Rule::Raise(name)
}

pub fn sym(symbol: Symbol) -> Rule {
    Rule::Sym(symbol)
}
