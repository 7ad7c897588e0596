/// ParserConfig holds the configuration for the parser
#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    /// Optional source filename or url, named in diagnostics
    pub source: Option<String>,
}
