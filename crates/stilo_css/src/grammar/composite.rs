//! Composite layer of the grammar: selectors, declarations, rulesets,
//! at-rules and the stylesheet envelope. Built on the tokens of the lexical
//! layer, following the CSS 2.2 grammar with the media-query shapes of
//! Media Queries Level 4.

use crate::rule::{eof, ilit, lit, must, one_of, opt, plus, raise, seq, sor, star, sym, until, Rule};
use crate::symbol::Symbol;

fn ows() -> Rule {
    sym(Symbol::OptionalWhitespace)
}

/// The composite rule behind the given symbol, or `None` when the symbol
/// belongs to the lexical layer.
pub(crate) fn define(symbol: Symbol) -> Option<Rule> {
    let rule = match symbol {
        Symbol::Important => seq([lit("!"), ows(), ilit("important")]),

        // An identifier followed by "arguments" (an expr).
        Symbol::Function => seq([
            sym(Symbol::Ident),
            lit("("),
            ows(),
            sym(Symbol::Expr),
            lit(")"),
            ows(),
        ]),

        // The generic dimension must stay behind every typed unit, and the
        // url token ahead of ident so unquoted urls are not split.
        Symbol::Term => sor([
            sym(Symbol::Function),
            seq([
                sor([
                    sym(Symbol::Percentage),
                    sym(Symbol::Length),
                    sym(Symbol::Ems),
                    sym(Symbol::Exs),
                    sym(Symbol::Angle),
                    sym(Symbol::Time),
                    sym(Symbol::Frequency),
                    sym(Symbol::String),
                    sym(Symbol::Url),
                    sym(Symbol::Ident),
                    sym(Symbol::Dimension),
                    sym(Symbol::Number),
                ]),
                ows(),
            ]),
            sym(Symbol::HexColor),
            sym(Symbol::Ident),
        ]),

        // Division or accumulation.
        Symbol::OperatorRule => seq([sor([lit("/"), lit(",")]), ows()]),

        // A collection of terms, optionally separated by operators.
        Symbol::Expr => seq([
            sym(Symbol::Term),
            star(seq([opt(sym(Symbol::OperatorRule)), sym(Symbol::Term)])),
        ]),

        Symbol::Property => sym(Symbol::Ident),

        Symbol::PropertyValue => sor([sym(Symbol::Function), sym(Symbol::Expr)]),

        Symbol::Prio => seq([sym(Symbol::Important), ows()]),

        // Once a property name has matched inside a block, the colon and the
        // value are mandatory; failing past this point is a parse error, not
        // a backtrack.
        Symbol::Declaration => seq([
            sym(Symbol::Property),
            ows(),
            must(seq([lit(":"), ows(), sym(Symbol::PropertyValue)])),
            opt(sym(Symbol::Prio)),
        ]),

        // Pseudo-elements use two colons, pseudo-classes one.
        Symbol::Pseudo => seq([
            lit(":"),
            opt(lit(":")),
            sor([sym(Symbol::Function), sym(Symbol::Ident)]),
        ]),

        Symbol::Attrib => seq([
            lit("["),
            ows(),
            sym(Symbol::Ident),
            ows(),
            opt(seq([
                sor([
                    lit("="),
                    lit("~="),
                    lit("|="),
                    lit("^="),
                    lit("$="),
                    lit("*="),
                ]),
                ows(),
                sor([
                    sym(Symbol::Ident),
                    seq([
                        sym(Symbol::String),
                        opt(seq([ows(), one_of("is")])),
                    ]),
                ]),
                ows(),
            ])),
            lit("]"),
        ]),

        Symbol::ElementName => sor([sym(Symbol::Ident), lit("*")]),

        Symbol::ClassModifier => seq([lit("."), sym(Symbol::Ident)]),

        // Child and adjacent-sibling combinators. The descendant combinator
        // is the implicit whitespace inside the selector rule.
        Symbol::Combinator => seq([sor([lit("+"), lit(">")]), ows()]),

        Symbol::SelectorModifier => sor([
            sym(Symbol::Hash),
            sym(Symbol::ClassModifier),
            sym(Symbol::Attrib),
            sym(Symbol::Pseudo),
        ]),

        Symbol::SimpleSelector => sor([
            seq([
                sym(Symbol::ElementName),
                star(sym(Symbol::SelectorModifier)),
            ]),
            plus(sym(Symbol::SelectorModifier)),
        ]),

        // Right-recursive: every recursion step first consumes a
        // simple_selector, so the recursion always makes progress.
        Symbol::Selector => seq([
            sym(Symbol::SimpleSelector),
            opt(sor([
                seq([sym(Symbol::Combinator), sym(Symbol::Selector)]),
                seq([
                    sym(Symbol::Whitespace),
                    opt(seq([opt(sym(Symbol::Combinator)), sym(Symbol::Selector)])),
                ]),
            ])),
        ]),

        Symbol::Ruleset => seq([
            sym(Symbol::Selector),
            star(seq([lit(","), ows(), sym(Symbol::Selector)])),
            lit("{"),
            ows(),
            opt(sym(Symbol::Declaration)),
            star(seq([lit(";"), ows(), opt(sym(Symbol::Declaration))])),
            lit("}"),
            ows(),
        ]),

        Symbol::PseudoPage => seq([lit(":"), sym(Symbol::Ident), ows()]),

        Symbol::Page => seq([
            sym(Symbol::PageKeyword),
            ows(),
            opt(sym(Symbol::PseudoPage)),
            lit("{"),
            ows(),
            opt(sym(Symbol::Declaration)),
            star(seq([lit(";"), ows(), opt(sym(Symbol::Declaration))])),
            lit("}"),
            ows(),
        ]),

        Symbol::MediaType => sym(Symbol::Ident),
        Symbol::MfName => sym(Symbol::Ident),

        Symbol::MfValue => sor([
            sym(Symbol::Dimension),
            sym(Symbol::Ratio),
            sym(Symbol::Number),
            sym(Symbol::Ident),
        ]),

        Symbol::MfPlain => seq([
            sym(Symbol::MfName),
            ows(),
            lit(":"),
            ows(),
            sym(Symbol::MfValue),
            ows(),
        ]),

        Symbol::MfBoolean => sym(Symbol::MfName),

        // One or two comparisons between a media property and range values.
        // Mixed-direction forms (value < name > value) are rejected.
        Symbol::MfRange => sor([
            seq([
                sym(Symbol::MfName),
                ows(),
                sym(Symbol::Comparator),
                ows(),
                sym(Symbol::MfValue),
            ]),
            seq([
                sym(Symbol::MfValue),
                ows(),
                sym(Symbol::Comparator),
                ows(),
                sym(Symbol::MfName),
            ]),
            seq([
                sym(Symbol::MfValue),
                ows(),
                sym(Symbol::LteComparator),
                ows(),
                sym(Symbol::MfName),
                ows(),
                sym(Symbol::LteComparator),
                ows(),
                sym(Symbol::MfValue),
            ]),
            seq([
                sym(Symbol::MfValue),
                ows(),
                sym(Symbol::GteComparator),
                ows(),
                sym(Symbol::MfName),
                ows(),
                sym(Symbol::GteComparator),
                ows(),
                sym(Symbol::MfValue),
            ]),
        ]),

        Symbol::MediaFeature => seq([
            lit("("),
            ows(),
            sor([
                sym(Symbol::MfPlain),
                sym(Symbol::MfBoolean),
                sym(Symbol::MfRange),
            ]),
            ows(),
            lit(")"),
            ows(),
        ]),

        Symbol::GeneralEnclosed => sor([
            seq([sym(Symbol::Ident), lit("("), until(lit(")"))]),
            seq([lit("("), ows(), sym(Symbol::Ident), until(lit(")"))]),
        ]),

        Symbol::MediaInParens => sor([
            seq([
                lit("("),
                ows(),
                sym(Symbol::MediaCondition),
                ows(),
                lit(")"),
            ]),
            sym(Symbol::MediaFeature),
            sym(Symbol::GeneralEnclosed),
        ]),

        Symbol::MediaNot => seq([
            sym(Symbol::NotKeyword),
            sym(Symbol::Whitespace),
            sym(Symbol::MediaInParens),
        ]),

        Symbol::MediaAnd => seq([
            sym(Symbol::MediaInParens),
            plus(seq([
                sym(Symbol::Whitespace),
                sym(Symbol::AndKeyword),
                sym(Symbol::Whitespace),
                sym(Symbol::MediaInParens),
            ])),
        ]),

        Symbol::MediaCondition => sor([
            sym(Symbol::MediaNot),
            sym(Symbol::MediaAnd),
            sym(Symbol::MediaInParens),
        ]),

        Symbol::MediaConditionWithoutOr => sor([
            sym(Symbol::MediaNot),
            sym(Symbol::MediaAnd),
            sym(Symbol::MediaInParens),
        ]),

        Symbol::Medium => seq([
            sor([
                sym(Symbol::MediaCondition),
                seq([
                    opt(seq([
                        sor([sym(Symbol::NotKeyword), sym(Symbol::OnlyKeyword)]),
                        sym(Symbol::Whitespace),
                    ])),
                    sym(Symbol::MediaType),
                    opt(seq([
                        sym(Symbol::Whitespace),
                        sym(Symbol::AndKeyword),
                        sym(Symbol::Whitespace),
                        sym(Symbol::MediaConditionWithoutOr),
                    ])),
                ]),
            ]),
            ows(),
        ]),

        Symbol::MediaList => seq([
            sym(Symbol::Medium),
            star(seq([lit(","), ows(), sym(Symbol::Medium)])),
        ]),

        Symbol::Media => seq([
            sym(Symbol::MediaKeyword),
            sym(Symbol::Whitespace),
            sym(Symbol::MediaList),
            lit("{"),
            ows(),
            star(sym(Symbol::Ruleset)),
            lit("}"),
            ows(),
        ]),

        Symbol::ImportRule => seq([
            sym(Symbol::ImportKeyword),
            ows(),
            sor([sym(Symbol::String), sym(Symbol::Url)]),
            ows(),
            opt(sym(Symbol::MediaList)),
            lit(";"),
            ows(),
        ]),

        Symbol::ImportRules => star(seq([
            sym(Symbol::ImportRule),
            opt(sor([
                seq([sym(Symbol::Cdo), ows()]),
                seq([sym(Symbol::Cdc), ows()]),
            ])),
        ])),

        // An optional encoding, import statements, then ruleset, media and
        // page statements. Anything the grammar cannot make progress on
        // before end of input raises a positioned error.
        Symbol::Stylesheet => seq([
            opt(sym(Symbol::Encoding)),
            star(sor([
                sym(Symbol::Whitespace),
                sym(Symbol::Cdo),
                sym(Symbol::Cdc),
            ])),
            sym(Symbol::ImportRules),
            star(seq([
                sor([sym(Symbol::Ruleset), sym(Symbol::Media), sym(Symbol::Page)]),
                star(sor([
                    seq([sym(Symbol::Cdo), ows()]),
                    seq([sym(Symbol::Cdc), ows()]),
                ])),
            ])),
            sor([eof(), raise("unexpected_input")]),
        ]),

        _ => return None,
    };

    Some(rule)
}

#[cfg(test)]
mod tests {
    use crate::matcher::probe;
    use crate::symbol::Symbol;

    fn consumed(symbol: Symbol, input: &str) -> Option<usize> {
        probe(symbol, input).expect("unexpected hard error")
    }

    #[test]
    fn simple_selectors() {
        assert_eq!(consumed(Symbol::SimpleSelector, "h1"), Some(2));
        assert_eq!(consumed(Symbol::SimpleSelector, "*"), Some(1));
        assert_eq!(consumed(Symbol::SimpleSelector, ".warn"), Some(5));
        assert_eq!(consumed(Symbol::SimpleSelector, "#main"), Some(5));
        assert_eq!(consumed(Symbol::SimpleSelector, "a.b#c:hover"), Some(11));
        assert_eq!(consumed(Symbol::SimpleSelector, "input[type=text]"), Some(16));
        assert_eq!(consumed(Symbol::SimpleSelector, "{"), None);
    }

    #[test]
    fn selectors_with_combinators() {
        assert_eq!(consumed(Symbol::Selector, "div > p"), Some(7));
        assert_eq!(consumed(Symbol::Selector, "ul li"), Some(5));
        assert_eq!(consumed(Symbol::Selector, "a + b"), Some(5));
        // the selector eats trailing whitespace, the brace stays
        assert_eq!(consumed(Symbol::Selector, "h1 {"), Some(3));
    }

    #[test]
    fn pseudos() {
        assert_eq!(consumed(Symbol::Pseudo, ":hover"), Some(6));
        assert_eq!(consumed(Symbol::Pseudo, "::before"), Some(8));
        assert_eq!(consumed(Symbol::Pseudo, ":lang(en)"), Some(9));
        assert_eq!(consumed(Symbol::Pseudo, "x"), None);
    }

    #[test]
    fn attribs() {
        assert_eq!(consumed(Symbol::Attrib, "[href]"), Some(6));
        assert_eq!(consumed(Symbol::Attrib, "[a=b]"), Some(5));
        assert_eq!(consumed(Symbol::Attrib, "[a ~= \"x\"]"), Some(10));
        assert_eq!(consumed(Symbol::Attrib, "[a^=\"x\" i]"), Some(10));
        assert_eq!(consumed(Symbol::Attrib, "[a*=b]"), Some(6));
        assert_eq!(consumed(Symbol::Attrib, "[=b]"), None);
    }

    #[test]
    fn expressions() {
        assert_eq!(consumed(Symbol::Expr, "1px solid #000"), Some(14));
        assert_eq!(consumed(Symbol::Expr, "serif, sans-serif"), Some(17));
        assert_eq!(consumed(Symbol::Expr, "1em/1.5"), Some(7));
        assert_eq!(consumed(Symbol::Function, "rgb(1, 2, 3)"), Some(12));
        assert_eq!(consumed(Symbol::Term, "url(a/b.png) ;"), Some(13));
    }

    #[test]
    fn declarations() {
        assert_eq!(consumed(Symbol::Declaration, "color: red"), Some(10));
        assert_eq!(consumed(Symbol::Declaration, "margin:0 auto"), Some(13));
        assert_eq!(
            consumed(Symbol::Declaration, "font: 12pt/14pt sans-serif"),
            Some(26)
        );
        assert_eq!(
            consumed(Symbol::Declaration, "color: red ! important"),
            Some(22)
        );
    }

    #[test]
    fn declaration_without_colon_is_a_hard_error() {
        let err = probe(Symbol::Declaration, "color red").unwrap_err();
        assert_eq!(err.rule, "declaration");
        assert_eq!(err.location.offset, 6);
    }

    #[test]
    fn rulesets() {
        assert_eq!(consumed(Symbol::Ruleset, "a{b:c}"), Some(6));
        assert_eq!(consumed(Symbol::Ruleset, "a { b: c; }"), Some(11));
        assert_eq!(consumed(Symbol::Ruleset, "a, b { c: d }"), Some(13));
        assert_eq!(consumed(Symbol::Ruleset, "a { }"), Some(5));
    }

    #[test]
    fn media_features() {
        assert_eq!(consumed(Symbol::MediaFeature, "(min-width: 600px)"), Some(18));
        assert_eq!(consumed(Symbol::MediaFeature, "(color)"), Some(7));
        assert_eq!(consumed(Symbol::MediaFeature, "(600px >= width)"), Some(16));
        assert_eq!(consumed(Symbol::MediaFeature, "(aspect-ratio: 16 : 9)"), Some(22));
    }

    #[test]
    fn mf_range_forms() {
        assert_eq!(consumed(Symbol::MfRange, "width <= 600px"), Some(14));
        assert_eq!(consumed(Symbol::MfRange, "600px >= width"), Some(14));
        assert_eq!(consumed(Symbol::MfRange, "400px <= width"), Some(14));
    }

    #[test]
    fn media_lists() {
        assert_eq!(consumed(Symbol::Medium, "screen"), Some(6));
        assert_eq!(consumed(Symbol::Medium, "only screen"), Some(11));
        assert_eq!(consumed(Symbol::Medium, "not print"), Some(9));
        assert_eq!(consumed(Symbol::Medium, "screen and (color)"), Some(18));
        assert_eq!(consumed(Symbol::MediaList, "screen, print"), Some(13));
        assert_eq!(
            consumed(Symbol::Medium, "not (min-width: 10px)"),
            Some(21)
        );
    }

    #[test]
    fn media_blocks() {
        assert_eq!(
            consumed(Symbol::Media, "@media print { a { b: c } }"),
            Some(27)
        );
        assert_eq!(consumed(Symbol::Media, "@media screen { }"), Some(17));
        // whitespace after the keyword is required
        assert_eq!(consumed(Symbol::Media, "@media{ }"), None);
    }

    #[test]
    fn import_rules() {
        assert_eq!(consumed(Symbol::ImportRule, "@import \"a.css\";"), Some(16));
        assert_eq!(
            consumed(Symbol::ImportRule, "@import url(a.css) screen;"),
            Some(26)
        );
        assert_eq!(consumed(Symbol::ImportRule, "@import a.css;"), None);
    }

    #[test]
    fn pages() {
        assert_eq!(consumed(Symbol::Page, "@page { margin: 0 }"), Some(19));
        assert_eq!(consumed(Symbol::Page, "@page :left { a: b; c: d }"), Some(26));
    }
}
