/// Identity of a named grammar rule.
///
/// Every rule of the lexical and composite layers that has an observable name
/// gets a variant here. The symbol is the key into the grammar table, the key
/// the action dispatcher matches on, and the name that shows up in trace
/// output and parse errors. Anonymous sub-rules (punctuation literals,
/// intermediate sequences) are inlined into their parent's rule and have no
/// symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    // lexical layer
    Newline,
    Comment,
    BadComment,
    Whitespace,
    OptionalWhitespace,
    LineContinuation,
    Cdo,
    Cdc,
    Comparator,
    LteComparator,
    GteComparator,
    HexNumber,
    Escape,
    NonAscii,
    LettersDigits,
    IdentSuffix,
    Ident,
    Hash,
    HexColor,
    Number,
    Length,
    Ems,
    Exs,
    Angle,
    Time,
    Frequency,
    Percentage,
    Dimension,
    Ratio,
    DoubleQuotedString,
    SingleQuotedString,
    String,
    Url,
    ImportKeyword,
    PageKeyword,
    MediaKeyword,
    EncodingCharset,
    Encoding,
    NotKeyword,
    AndKeyword,
    OrKeyword,
    OnlyKeyword,

    // composite layer
    Important,
    Function,
    Term,
    OperatorRule,
    Expr,
    Property,
    PropertyValue,
    Prio,
    Declaration,
    Pseudo,
    Attrib,
    ElementName,
    ClassModifier,
    Combinator,
    SelectorModifier,
    SimpleSelector,
    Selector,
    Ruleset,
    PseudoPage,
    Page,
    MediaType,
    MfName,
    MfValue,
    MfPlain,
    MfBoolean,
    MfRange,
    MediaFeature,
    GeneralEnclosed,
    MediaInParens,
    MediaNot,
    MediaAnd,
    MediaCondition,
    MediaConditionWithoutOr,
    Medium,
    MediaList,
    Media,
    ImportRule,
    ImportRules,
    Stylesheet,
}

impl Symbol {
    /// Every symbol, in declaration order. Used to build the grammar table
    /// and by the cycle analysis.
    pub const ALL: &'static [Symbol] = &[
        Symbol::Newline,
        Symbol::Comment,
        Symbol::BadComment,
        Symbol::Whitespace,
        Symbol::OptionalWhitespace,
        Symbol::LineContinuation,
        Symbol::Cdo,
        Symbol::Cdc,
        Symbol::Comparator,
        Symbol::LteComparator,
        Symbol::GteComparator,
        Symbol::HexNumber,
        Symbol::Escape,
        Symbol::NonAscii,
        Symbol::LettersDigits,
        Symbol::IdentSuffix,
        Symbol::Ident,
        Symbol::Hash,
        Symbol::HexColor,
        Symbol::Number,
        Symbol::Length,
        Symbol::Ems,
        Symbol::Exs,
        Symbol::Angle,
        Symbol::Time,
        Symbol::Frequency,
        Symbol::Percentage,
        Symbol::Dimension,
        Symbol::Ratio,
        Symbol::DoubleQuotedString,
        Symbol::SingleQuotedString,
        Symbol::String,
        Symbol::Url,
        Symbol::ImportKeyword,
        Symbol::PageKeyword,
        Symbol::MediaKeyword,
        Symbol::EncodingCharset,
        Symbol::Encoding,
        Symbol::NotKeyword,
        Symbol::AndKeyword,
        Symbol::OrKeyword,
        Symbol::OnlyKeyword,
        Symbol::Important,
        Symbol::Function,
        Symbol::Term,
        Symbol::OperatorRule,
        Symbol::Expr,
        Symbol::Property,
        Symbol::PropertyValue,
        Symbol::Prio,
        Symbol::Declaration,
        Symbol::Pseudo,
        Symbol::Attrib,
        Symbol::ElementName,
        Symbol::ClassModifier,
        Symbol::Combinator,
        Symbol::SelectorModifier,
        Symbol::SimpleSelector,
        Symbol::Selector,
        Symbol::Ruleset,
        Symbol::PseudoPage,
        Symbol::Page,
        Symbol::MediaType,
        Symbol::MfName,
        Symbol::MfValue,
        Symbol::MfPlain,
        Symbol::MfBoolean,
        Symbol::MfRange,
        Symbol::MediaFeature,
        Symbol::GeneralEnclosed,
        Symbol::MediaInParens,
        Symbol::MediaNot,
        Symbol::MediaAnd,
        Symbol::MediaCondition,
        Symbol::MediaConditionWithoutOr,
        Symbol::Medium,
        Symbol::MediaList,
        Symbol::Media,
        Symbol::ImportRule,
        Symbol::ImportRules,
        Symbol::Stylesheet,
    ];

    /// The grammar-level name of this rule, as used in traces and errors.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Newline => "newline",
            Symbol::Comment => "comment",
            Symbol::BadComment => "bad_comment",
            Symbol::Whitespace => "whitespace",
            Symbol::OptionalWhitespace => "optional_whitespace",
            Symbol::LineContinuation => "line_continuation",
            Symbol::Cdo => "CDO",
            Symbol::Cdc => "CDC",
            Symbol::Comparator => "comparator",
            Symbol::LteComparator => "lte_comparator",
            Symbol::GteComparator => "gte_comparator",
            Symbol::HexNumber => "hex_number",
            Symbol::Escape => "escape",
            Symbol::NonAscii => "non_ascii",
            Symbol::LettersDigits => "letters_digits",
            Symbol::IdentSuffix => "ident_suffix",
            Symbol::Ident => "ident",
            Symbol::Hash => "hash",
            Symbol::HexColor => "hexcolor",
            Symbol::Number => "number",
            Symbol::Length => "length",
            Symbol::Ems => "ems",
            Symbol::Exs => "exs",
            Symbol::Angle => "angle",
            Symbol::Time => "time",
            Symbol::Frequency => "frequency",
            Symbol::Percentage => "percentage",
            Symbol::Dimension => "dimension",
            Symbol::Ratio => "ratio",
            Symbol::DoubleQuotedString => "double_quoted_string",
            Symbol::SingleQuotedString => "single_quoted_string",
            Symbol::String => "string",
            Symbol::Url => "url",
            Symbol::ImportKeyword => "import_keyword",
            Symbol::PageKeyword => "page_keyword",
            Symbol::MediaKeyword => "media_keyword",
            Symbol::EncodingCharset => "encoding_charset",
            Symbol::Encoding => "encoding",
            Symbol::NotKeyword => "not_keyword",
            Symbol::AndKeyword => "and_keyword",
            Symbol::OrKeyword => "or_keyword",
            Symbol::OnlyKeyword => "only_keyword",
            Symbol::Important => "important",
            Symbol::Function => "function",
            Symbol::Term => "term",
            Symbol::OperatorRule => "operator_rule",
            Symbol::Expr => "expr",
            Symbol::Property => "property",
            Symbol::PropertyValue => "property_value",
            Symbol::Prio => "prio",
            Symbol::Declaration => "declaration",
            Symbol::Pseudo => "pseudo",
            Symbol::Attrib => "attrib",
            Symbol::ElementName => "element_name",
            Symbol::ClassModifier => "class_modifier",
            Symbol::Combinator => "combinator",
            Symbol::SelectorModifier => "selector_modifier",
            Symbol::SimpleSelector => "simple_selector",
            Symbol::Selector => "selector",
            Symbol::Ruleset => "ruleset",
            Symbol::PseudoPage => "pseudo_page",
            Symbol::Page => "page",
            Symbol::MediaType => "media_type",
            Symbol::MfName => "mf_name",
            Symbol::MfValue => "mf_value",
            Symbol::MfPlain => "mf_plain",
            Symbol::MfBoolean => "mf_boolean",
            Symbol::MfRange => "mf_range",
            Symbol::MediaFeature => "media_feature",
            Symbol::GeneralEnclosed => "general_enclosed",
            Symbol::MediaInParens => "media_in_parens",
            Symbol::MediaNot => "media_not",
            Symbol::MediaAnd => "media_and",
            Symbol::MediaCondition => "media_condition",
            Symbol::MediaConditionWithoutOr => "media_condition_without_or",
            Symbol::Medium => "medium",
            Symbol::MediaList => "media_list",
            Symbol::Media => "media",
            Symbol::ImportRule => "import_rule",
            Symbol::ImportRules => "import_rules",
            Symbol::Stylesheet => "stylesheet",
        }
    }
}
