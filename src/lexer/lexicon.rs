use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::engine::config::LexiconConfig;
use crate::lexer::TokenCategory;

lazy_static! {
    static ref DEFAULT_LEXICON: Lexicon = Lexicon::new(&LexiconConfig::default());
}

/// The lexicon built from [`LexiconConfig::default`], shared by every caller.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// An immutable rule set: the exact-match literal table in priority order plus the
/// parameters of the pattern rules.
#[derive(Debug, Clone)]
pub struct Lexicon {
    literal_rules: Vec<(TokenCategory, Vec<String>)>,
    reserved_words: HashSet<String>,
    line_comment_marker: Option<String>,
    block_comment: Option<(String, String)>,
    identifier_max_len: usize,
}

impl Lexicon {
    pub fn new(config: &LexiconConfig) -> Self {
        let logical = [
            config.logical_and.as_str(),
            config.logical_or.as_str(),
            config.logical_not.as_str(),
        ];

        let literal_rules = vec![
            (TokenCategory::ArithmeticOperator, words(&["+", "-", "*", "/"])),
            (
                TokenCategory::ComparisonOperator,
                words(&["==", "!=", ">", "<", ">=", "<="]),
            ),
            (
                TokenCategory::LogicalOperator,
                words(&logical)
                    .into_iter()
                    .filter(|w| !w.is_empty())
                    .collect(),
            ),
            (
                TokenCategory::AssignmentOperator,
                words(&["=", "+=", "-=", "*=", "/="]),
            ),
            (TokenCategory::IncrementOperator, words(&["++", "--"])),
            (TokenCategory::Parenthesis, words(&["(", ")"])),
            (TokenCategory::Brace, words(&["{", "}"])),
            (TokenCategory::Terminator, words(&[";"])),
            (TokenCategory::Separator, words(&[","])),
        ];

        // An empty marker disables its rule.
        let line_comment_marker =
            Some(config.line_comment_marker.clone()).filter(|m| !m.is_empty());
        let block_comment = if config.block_comment_open.is_empty()
            || config.block_comment_close.is_empty()
        {
            None
        } else {
            Some((
                config.block_comment_open.clone(),
                config.block_comment_close.clone(),
            ))
        };

        Self {
            literal_rules,
            reserved_words: config.reserved_words.iter().cloned().collect(),
            line_comment_marker,
            block_comment,
            identifier_max_len: config.identifier_max_len,
        }
    }

    /// Category of the first literal rule whose set contains `fragment`.
    pub fn literal_category(&self, fragment: &str) -> Option<TokenCategory> {
        self.literal_rules
            .iter()
            .find(|(_, literals)| literals.iter().any(|l| l == fragment))
            .map(|(category, _)| *category)
    }

    pub fn is_reserved_word(&self, fragment: &str) -> bool {
        self.reserved_words.contains(fragment)
    }

    pub fn line_comment_marker(&self) -> Option<&str> {
        self.line_comment_marker.as_deref()
    }

    pub fn block_comment_delimiters(&self) -> Option<(&str, &str)> {
        self.block_comment
            .as_ref()
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    pub fn identifier_max_len(&self) -> usize {
        self.identifier_max_len
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
