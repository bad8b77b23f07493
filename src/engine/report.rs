//! Plain-text rendering of classification results
//!
//! The report lists one token per line as `Type: <category>, Value: <text>`
//! and ends with an echo of the input text.

use crate::lexer::{Token, TokenCategory};
use std::fmt::Write;

pub fn format_report(text: &str, tokens: &[Token]) -> String {
    let mut report = String::new();

    for token in tokens {
        // Writing into a String cannot fail
        let _ = writeln!(report, "Type: {}, Value: {}", token.category, token.text);
    }
    let _ = write!(report, "Input text: {}", text);

    report
}

/// Counts tokens per category, in category declaration order. Categories with no tokens are skipped.
pub fn summarize(tokens: &[Token]) -> Vec<(TokenCategory, usize)> {
    TokenCategory::ALL
        .iter()
        .map(|&category| {
            let count = tokens.iter().filter(|t| t.category == category).count();
            (category, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}
