// Configuration for the lexico rule set and terminal front end
// Defaults describe the instructional language's rule set

/// Rule-set configuration used to build a [`crate::lexer::Lexicon`]
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconConfig {
    /// Marker that opens a line comment (default `¿`)
    pub line_comment_marker: String,

    /// Block comment delimiters (default `#*` ... `*#`)
    pub block_comment_open: String,
    pub block_comment_close: String,

    /// Logical operator words (defaults `YY`, `OO`, `!`)
    pub logical_and: String,
    pub logical_or: String,
    pub logical_not: String,

    /// Closed keyword list of the instructional language
    pub reserved_words: Vec<String>,

    /// Longest identifier accepted, in characters (default 10)
    pub identifier_max_len: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            // `Â¿` is `¿` double-encoded; the marker is the single `¿`, so `Â¿x` is not a comment
            line_comment_marker: "¿".to_string(),
            block_comment_open: "#*".to_string(),
            block_comment_close: "*#".to_string(),
            logical_and: "YY".to_string(),
            logical_or: "OO".to_string(),
            logical_not: "!".to_string(),
            reserved_words: [
                "if", "else", "while", "for", "function", "return", "String", "int",
            ]
            .iter()
            .map(|word| word.to_string())
            .collect(),
            identifier_max_len: 10,
        }
    }
}

/// Terminal front end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Number of past inputs remembered (default 50)
    pub history_limit: usize,

    /// Display width of the token value column, in terminal cells (default 24)
    pub value_column_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            value_column_width: 24,
        }
    }
}

/// Master configuration combining all lexico settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub ui: UiConfig,
}
