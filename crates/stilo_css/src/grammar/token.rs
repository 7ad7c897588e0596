//! Lexical layer of the grammar.
//!
//! Tokens may consist of multiple code points but are not sequences of other
//! tokens; the exceptions are `ident`, `escape` and `hash`, which reuse other
//! tokens for consistency rather than necessity.

use crate::rule::{
    any, eof, ilit, lit, minus, not_one, one_of, opt, plus, range, ranges, rep, seq, sor, star,
    sym, until, white_space, Rule,
};
use crate::symbol::Symbol;

const HEX_DIGITS: &[(char, char)] = &[('0', '9'), ('a', 'f'), ('A', 'F')];
const ASCII_LETTERS_DIGITS: &[(char, char)] = &[('a', 'z'), ('A', 'Z'), ('0', '9')];
const IDENT_START: &[(char, char)] = &[('a', 'z'), ('A', 'Z'), ('_', '_')];

fn digits() -> Rule {
    plus(range('0', '9'))
}

/// The lexical rule behind the given symbol, or `None` when the symbol
/// belongs to the composite layer.
pub(crate) fn define(symbol: Symbol) -> Option<Rule> {
    let rule = match symbol {
        // Any code point sequence that serves as a line terminator.
        Symbol::Newline => sor([lit("\n"), lit("\r\n"), lit("\r"), lit("\u{0c}")]),

        Symbol::Comment => seq([lit("/*"), until(lit("*/"))]),

        // A comment with no closing marker before end of input. Matched, but
        // kept distinct from a well-formed comment.
        Symbol::BadComment => seq([lit("/*"), minus(star(any()), lit("*/")), eof()]),

        // One or more whitespace code points. Comments match as whitespace.
        Symbol::Whitespace => plus(sor([
            white_space(),
            sym(Symbol::Comment),
            sym(Symbol::BadComment),
            sym(Symbol::Newline),
        ])),

        Symbol::OptionalWhitespace => star(sym(Symbol::Whitespace)),

        Symbol::LineContinuation => seq([lit("\\"), sym(Symbol::Newline)]),

        // Comment-document open/close markers, allowed at the stylesheet
        // level for legacy reasons.
        Symbol::Cdo => lit("<!--"),
        Symbol::Cdc => lit("-->"),

        // Longer comparators must come first so `<=` is not split.
        Symbol::Comparator => sor([lit("<="), lit(">="), lit("="), lit("<"), lit(">")]),
        Symbol::LteComparator => sor([lit("<="), lit("<")]),
        Symbol::GteComparator => sor([lit(">="), lit(">")]),

        Symbol::HexNumber => rep(1, 6, ranges(HEX_DIGITS)),

        // A backslash followed by either a hex code point unit or any single
        // code point that is not a newline. The latter is how string
        // terminators are embedded inside strings.
        Symbol::Escape => seq([
            lit("\\"),
            sor([sym(Symbol::HexNumber), not_one("\n\r\u{0c}")]),
        ]),

        Symbol::NonAscii => range('\u{a0}', '\u{10ffff}'),

        Symbol::LettersDigits => ranges(ASCII_LETTERS_DIGITS),

        Symbol::IdentSuffix => star(sor([
            sym(Symbol::Escape),
            sym(Symbol::LettersDigits),
            lit("-"),
            lit("_"),
            sym(Symbol::NonAscii),
        ])),

        // Identifiers may be, depending on context, element names,
        // pseudo-classes, property names, property values, etc.
        Symbol::Ident => seq([
            sor([
                lit("--"),
                seq([
                    opt(lit("-")),
                    sor([sym(Symbol::Escape), sym(Symbol::NonAscii), ranges(IDENT_START)]),
                ]),
            ]),
            sym(Symbol::IdentSuffix),
        ]),

        Symbol::Hash => seq([lit("#"), sym(Symbol::IdentSuffix)]),

        // The 3-or-6 hex digit constraint on colors is not enforced here.
        Symbol::HexColor => seq([sym(Symbol::Hash), sym(Symbol::OptionalWhitespace)]),

        Symbol::Number => seq([
            opt(one_of("+-")),
            sor([
                seq([digits(), lit("."), digits()]),
                digits(),
                seq([lit("."), digits()]),
            ]),
            opt(seq([one_of("eE"), opt(one_of("+-")), digits()])),
        ]),

        Symbol::Length => seq([
            sym(Symbol::Number),
            sor([
                ilit("px"),
                ilit("cm"),
                ilit("mm"),
                ilit("in"),
                ilit("pt"),
                ilit("pc"),
            ]),
        ]),

        Symbol::Ems => seq([sym(Symbol::Number), ilit("em")]),
        Symbol::Exs => seq([sym(Symbol::Number), ilit("ex")]),

        Symbol::Angle => seq([
            sym(Symbol::Number),
            sor([ilit("deg"), ilit("rad"), ilit("grad")]),
        ]),

        Symbol::Time => seq([sym(Symbol::Number), sor([ilit("ms"), ilit("s")])]),

        Symbol::Frequency => seq([sym(Symbol::Number), sor([ilit("hz"), ilit("khz")])]),

        Symbol::Percentage => seq([sym(Symbol::Number), lit("%")]),

        // A number with unknown units; ordered after the typed units
        // wherever both are alternatives.
        Symbol::Dimension => seq([sym(Symbol::Number), sym(Symbol::Ident)]),

        // A ratio of two numbers, e.g. an aspect ratio in a media query.
        Symbol::Ratio => seq([
            sym(Symbol::Number),
            sym(Symbol::OptionalWhitespace),
            lit(":"),
            sym(Symbol::OptionalWhitespace),
            sym(Symbol::Number),
        ]),

        Symbol::DoubleQuotedString => quoted_string("\"", "\"\\\n\r\u{0c}"),
        Symbol::SingleQuotedString => quoted_string("'", "'\\\n\r\u{0c}"),

        Symbol::String => sor([
            sym(Symbol::DoubleQuotedString),
            sym(Symbol::SingleQuotedString),
        ]),

        // The unescaped body excludes quotes, backslashes, parentheses and
        // whitespace; anything else needs an escape or a quoted string.
        Symbol::Url => seq([
            ilit("url"),
            lit("("),
            sym(Symbol::OptionalWhitespace),
            opt(star(sor([
                sym(Symbol::Escape),
                minus(not_one("\"'\\()"), white_space()),
            ]))),
            sym(Symbol::OptionalWhitespace),
            lit(")"),
        ]),

        Symbol::ImportKeyword => ilit("@import"),
        Symbol::PageKeyword => ilit("@page"),
        Symbol::MediaKeyword => ilit("@media"),

        Symbol::EncodingCharset => sym(Symbol::DoubleQuotedString),

        // Note the single literal space after the keyword; tabs or newlines
        // do not match, per the CSS specification.
        Symbol::Encoding => seq([
            ilit("@charset "),
            sym(Symbol::EncodingCharset),
            lit(";"),
        ]),

        Symbol::NotKeyword => ilit("not"),
        Symbol::AndKeyword => ilit("and"),
        Symbol::OrKeyword => ilit("or"),
        Symbol::OnlyKeyword => ilit("only"),

        _ => return None,
    };

    Some(rule)
}

fn quoted_string(quote: &'static str, excluded: &'static str) -> Rule {
    seq([
        lit(quote),
        star(sor([
            not_one(excluded),
            sym(Symbol::Escape),
            sym(Symbol::LineContinuation),
        ])),
        lit(quote),
    ])
}

#[cfg(test)]
mod tests {
    use crate::matcher::probe;
    use crate::symbol::Symbol;

    fn consumed(symbol: Symbol, input: &str) -> Option<usize> {
        probe(symbol, input).expect("unexpected hard error")
    }

    #[test]
    fn newline() {
        assert_eq!(consumed(Symbol::Newline, "\n"), Some(1));
        assert_eq!(consumed(Symbol::Newline, "\r\nx"), Some(2));
        assert_eq!(consumed(Symbol::Newline, "\r"), Some(1));
        assert_eq!(consumed(Symbol::Newline, "\u{0c}"), Some(1));
        assert_eq!(consumed(Symbol::Newline, "x"), None);
    }

    #[test]
    fn comments() {
        assert_eq!(consumed(Symbol::Comment, "/* hi */x"), Some(8));
        assert_eq!(consumed(Symbol::Comment, "/**/"), Some(4));
        // unterminated: not a comment, but a bad_comment that runs to EOF
        assert_eq!(consumed(Symbol::Comment, "/* hi"), None);
        assert_eq!(consumed(Symbol::BadComment, "/* hi"), Some(5));
        assert_eq!(consumed(Symbol::BadComment, "/* hi */"), None);
    }

    #[test]
    fn whitespace_includes_comments() {
        assert_eq!(consumed(Symbol::Whitespace, "  /* x */\t\nz"), Some(11));
        assert_eq!(consumed(Symbol::Whitespace, "z"), None);
        assert_eq!(consumed(Symbol::OptionalWhitespace, "z"), Some(0));
    }

    #[test]
    fn idents() {
        assert_eq!(consumed(Symbol::Ident, "color"), Some(5));
        assert_eq!(consumed(Symbol::Ident, "-moz-box"), Some(8));
        assert_eq!(consumed(Symbol::Ident, "--custom"), Some(8));
        assert_eq!(consumed(Symbol::Ident, "_a1"), Some(3));
        assert_eq!(consumed(Symbol::Ident, "漢字"), Some(6));
        assert_eq!(consumed(Symbol::Ident, "\\*weird"), Some(7));
        assert_eq!(consumed(Symbol::Ident, "1abc"), None);
        // a lone dash starts nothing
        assert_eq!(consumed(Symbol::Ident, "-"), None);
    }

    #[test]
    fn escapes() {
        assert_eq!(consumed(Symbol::Escape, "\\41"), Some(3));
        // the hex unit caps at six digits
        assert_eq!(consumed(Symbol::Escape, "\\1234567"), Some(7));
        assert_eq!(consumed(Symbol::Escape, "\\\""), Some(2));
        assert_eq!(consumed(Symbol::Escape, "\\\n"), None);
    }

    #[test]
    fn hashes() {
        assert_eq!(consumed(Symbol::Hash, "#nav-1_b"), Some(8));
        assert_eq!(consumed(Symbol::Hash, "#"), Some(1));
        // trailing whitespace belongs to the hexcolor token
        assert_eq!(consumed(Symbol::HexColor, "#fff ;"), Some(5));
        assert_eq!(consumed(Symbol::HexColor, "#abcd"), Some(5));
    }

    #[test]
    fn numbers() {
        assert_eq!(consumed(Symbol::Number, "12"), Some(2));
        assert_eq!(consumed(Symbol::Number, "-4.5"), Some(4));
        assert_eq!(consumed(Symbol::Number, ".5"), Some(2));
        assert_eq!(consumed(Symbol::Number, "+3e-2"), Some(5));
        assert_eq!(consumed(Symbol::Number, "6E4"), Some(3));
        // no digits after the dot: the mantissa is just the digits
        assert_eq!(consumed(Symbol::Number, "12."), Some(2));
        assert_eq!(consumed(Symbol::Number, "px"), None);
    }

    #[test]
    fn units() {
        assert_eq!(consumed(Symbol::Length, "12px"), Some(4));
        assert_eq!(consumed(Symbol::Length, "12PT"), Some(4));
        assert_eq!(consumed(Symbol::Length, "12q"), None);
        assert_eq!(consumed(Symbol::Ems, "1.5em"), Some(5));
        assert_eq!(consumed(Symbol::Exs, "2ex"), Some(3));
        assert_eq!(consumed(Symbol::Angle, "90deg"), Some(5));
        assert_eq!(consumed(Symbol::Angle, "1grad"), Some(5));
        assert_eq!(consumed(Symbol::Time, "200ms"), Some(5));
        assert_eq!(consumed(Symbol::Time, "2s"), Some(2));
        assert_eq!(consumed(Symbol::Frequency, "44khz"), Some(5));
        assert_eq!(consumed(Symbol::Percentage, "50%"), Some(3));
        assert_eq!(consumed(Symbol::Dimension, "12foo"), Some(5));
        assert_eq!(consumed(Symbol::Dimension, "12"), None);
    }

    #[test]
    fn ratios() {
        assert_eq!(consumed(Symbol::Ratio, "16:9"), Some(4));
        assert_eq!(consumed(Symbol::Ratio, "16 : 9"), Some(6));
        assert_eq!(consumed(Symbol::Ratio, "16/9"), None);
    }

    #[test]
    fn strings() {
        assert_eq!(consumed(Symbol::String, "\"a b\""), Some(5));
        assert_eq!(consumed(Symbol::String, "'a b'"), Some(5));
        assert_eq!(consumed(Symbol::String, "\"a\\\"b\""), Some(6));
        // a backslash-newline continues the string
        assert_eq!(consumed(Symbol::String, "\"a\\\nb\""), Some(6));
        assert_eq!(consumed(Symbol::String, "\"a\nb\""), None);
        assert_eq!(consumed(Symbol::String, "\"unterminated"), None);
    }

    #[test]
    fn urls() {
        assert_eq!(consumed(Symbol::Url, "url(img/logo.png)"), Some(17));
        assert_eq!(consumed(Symbol::Url, "URL( spaced )"), Some(13));
        assert_eq!(consumed(Symbol::Url, "url()"), Some(5));
        // quoted bodies go through the string token instead
        assert_eq!(consumed(Symbol::Url, "url(\"x\")"), None);
        assert_eq!(consumed(Symbol::Url, "url (x)"), None);
    }

    #[test]
    fn keywords() {
        assert_eq!(consumed(Symbol::ImportKeyword, "@IMPORT"), Some(7));
        assert_eq!(consumed(Symbol::PageKeyword, "@page"), Some(5));
        assert_eq!(consumed(Symbol::MediaKeyword, "@Media"), Some(6));
        assert_eq!(consumed(Symbol::NotKeyword, "NOT"), Some(3));
        assert_eq!(consumed(Symbol::AndKeyword, "and"), Some(3));
        assert_eq!(consumed(Symbol::OrKeyword, "Or"), Some(2));
        assert_eq!(consumed(Symbol::OnlyKeyword, "only"), Some(4));
    }

    #[test]
    fn charset() {
        assert_eq!(consumed(Symbol::Encoding, "@charset \"utf-8\";"), Some(17));
        // exactly one space is required after the keyword
        assert_eq!(consumed(Symbol::Encoding, "@charset\t\"utf-8\";"), None);
        assert_eq!(consumed(Symbol::Encoding, "@charset 'utf-8';"), None);
    }

    #[test]
    fn comparators_prefer_longest() {
        assert_eq!(consumed(Symbol::Comparator, "<=x"), Some(2));
        assert_eq!(consumed(Symbol::Comparator, ">=x"), Some(2));
        assert_eq!(consumed(Symbol::Comparator, "<x"), Some(1));
        assert_eq!(consumed(Symbol::LteComparator, "<="), Some(2));
        assert_eq!(consumed(Symbol::LteComparator, ">="), None);
        assert_eq!(consumed(Symbol::GteComparator, ">"), Some(1));
    }

    #[test]
    fn cdo_cdc() {
        assert_eq!(consumed(Symbol::Cdo, "<!--"), Some(4));
        assert_eq!(consumed(Symbol::Cdc, "-->"), Some(3));
    }
}
