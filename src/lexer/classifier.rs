use crate::lexer::lexicon::{default_lexicon, Lexicon};
use crate::lexer::splitter::split_fragments;
use crate::lexer::{Token, TokenCategory};

/// Pattern rules, tested in this order after the literal rules.
const PATTERN_RULES: [TokenCategory; 8] = [
    TokenCategory::NaturalNumber,
    TokenCategory::RealNumber,
    TokenCategory::ReservedWord,
    TokenCategory::Identifier,
    TokenCategory::Hexadecimal,
    TokenCategory::StringLiteral,
    TokenCategory::LineComment,
    TokenCategory::BlockComment,
];

/// Tokens recognized in a text, plus the fragments no rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexReport {
    pub tokens: Vec<Token>,
    pub dropped: Vec<String>,
}

fn is_natural_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn is_real_number(word: &str) -> bool {
    match word.split_once('.') {
        Some((whole, fraction)) => is_natural_number(whole) && is_natural_number(fraction),
        None => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_identifier(word: &str, max_len: usize) -> bool {
    let mut chars = word.chars();
    let starts_well = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);

    starts_well && chars.all(is_word_char) && word.len() <= max_len
}

fn is_hexadecimal(word: &str) -> bool {
    word.strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
        .map(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

fn is_string_literal(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('"') && word.ends_with('"')
}

fn is_line_comment(word: &str, marker: Option<&str>) -> bool {
    marker.map_or(false, |m| word.starts_with(m))
}

/// Opening and closing delimiters must not overlap: `#*#` is not a block comment.
fn is_block_comment(word: &str, delimiters: Option<(&str, &str)>) -> bool {
    match delimiters {
        Some((open, close)) => {
            word.len() >= open.len() + close.len()
                && word.starts_with(open)
                && word.ends_with(close)
        }
        None => false,
    }
}

fn matches_pattern(category: TokenCategory, word: &str, lexicon: &Lexicon) -> bool {
    match category {
        TokenCategory::NaturalNumber => is_natural_number(word),
        TokenCategory::RealNumber => is_real_number(word),
        TokenCategory::ReservedWord => lexicon.is_reserved_word(word),
        TokenCategory::Identifier => is_identifier(word, lexicon.identifier_max_len()),
        TokenCategory::Hexadecimal => is_hexadecimal(word),
        TokenCategory::StringLiteral => is_string_literal(word),
        TokenCategory::LineComment => is_line_comment(word, lexicon.line_comment_marker()),
        TokenCategory::BlockComment => {
            is_block_comment(word, lexicon.block_comment_delimiters())
        }
        _ => false,
    }
}

/// Assigns a category to a single fragment, or `None` when no rule matches.
///
/// Literal rules are tested before pattern rules; the first match wins.
pub fn classify_fragment(fragment: &str, lexicon: &Lexicon) -> Option<Token> {
    let category = lexicon.literal_category(fragment).or_else(|| {
        PATTERN_RULES
            .iter()
            .copied()
            .find(|&category| matches_pattern(category, fragment, lexicon))
    })?;

    Some(Token::new(category, fragment))
}

/// Classifies every whitespace-delimited fragment of `text` with `lexicon`,
/// keeping the dropped fragments.
pub fn lex_report(text: &str, lexicon: &Lexicon) -> LexReport {
    let mut report = LexReport::default();

    for fragment in split_fragments(text) {
        match classify_fragment(fragment, lexicon) {
            Some(token) => report.tokens.push(token),
            None => {
                tracing::debug!(fragment, "no rule matched, dropping fragment");
                report.dropped.push(fragment.to_string());
            }
        }
    }

    report
}

/// Classifies `text` with a caller-supplied lexicon.
pub fn classify_with(text: &str, lexicon: &Lexicon) -> Vec<Token> {
    lex_report(text, lexicon).tokens
}

/// Classifies `text` with the default lexicon. Unrecognized fragments are dropped silently.
pub fn classify(text: &str) -> Vec<Token> {
    classify_with(text, default_lexicon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::LexiconConfig;
    use crate::lexer::TokenCategory::*;

    fn categorize(word: &str) -> Option<TokenCategory> {
        classify_fragment(word, default_lexicon()).map(|t| t.category)
    }

    fn pairs(text: &str) -> Vec<(TokenCategory, String)> {
        classify(text)
            .into_iter()
            .map(|t| (t.category, t.text))
            .collect()
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(
            pairs("x = 5 + 3 ;"),
            vec![
                (Identifier, "x".to_string()),
                (AssignmentOperator, "=".to_string()),
                (NaturalNumber, "5".to_string()),
                (ArithmeticOperator, "+".to_string()),
                (NaturalNumber, "3".to_string()),
                (Terminator, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_condition_with_spaced_parentheses() {
        assert_eq!(
            pairs("if ( x >= 10.5 )"),
            vec![
                (ReservedWord, "if".to_string()),
                (Parenthesis, "(".to_string()),
                (Identifier, "x".to_string()),
                (ComparisonOperator, ">=".to_string()),
                (RealNumber, "10.5".to_string()),
                (Parenthesis, ")".to_string()),
            ]
        );
    }

    #[test]
    fn test_condition_with_attached_parentheses_drops_fragments() {
        // "(x" and "10.5)" are single fragments that match no rule.
        assert_eq!(
            pairs("if (x >= 10.5)"),
            vec![
                (ReservedWord, "if".to_string()),
                (ComparisonOperator, ">=".to_string()),
            ]
        );
    }

    #[test]
    fn test_hex_increment_identifier() {
        assert_eq!(
            pairs("0xFF ++ y"),
            vec![
                (Hexadecimal, "0xFF".to_string()),
                (IncrementOperator, "++".to_string()),
                (Identifier, "y".to_string()),
            ]
        );
    }

    #[test]
    fn test_unrecognized_fragment_is_dropped() {
        let tokens = classify("x @@ y");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(Identifier, "x"));
        assert_eq!(tokens[1], Token::new(Identifier, "y"));
    }

    #[test]
    fn test_empty_input() {
        assert!(classify("").is_empty());
        assert!(classify("   \n\t").is_empty());
    }

    #[test]
    fn test_every_literal_rule() {
        let cases = [
            ("+ - * /", ArithmeticOperator),
            ("== != > < >= <=", ComparisonOperator),
            ("YY OO !", LogicalOperator),
            ("= += -= *= /=", AssignmentOperator),
            ("++ --", IncrementOperator),
            ("( )", Parenthesis),
            ("{ }", Brace),
            (";", Terminator),
            (",", Separator),
        ];
        for (text, expected) in cases {
            for token in classify(text) {
                assert_eq!(token.category, expected, "fragment {:?}", token.text);
            }
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(categorize("0"), Some(NaturalNumber));
        assert_eq!(categorize("007"), Some(NaturalNumber));
        assert_eq!(categorize("3.14"), Some(RealNumber));
        assert_eq!(categorize("-5"), None);
        assert_eq!(categorize("3."), None);
        assert_eq!(categorize(".5"), None);
        assert_eq!(categorize("1.2.3"), None);
    }

    #[test]
    fn test_reserved_words_before_identifiers() {
        for word in ["if", "else", "while", "for", "function", "return", "String", "int"] {
            assert_eq!(categorize(word), Some(ReservedWord), "{}", word);
        }
        assert_eq!(categorize("If"), Some(Identifier));
        assert_eq!(categorize("string"), Some(Identifier));
    }

    #[test]
    fn test_identifier_length_limit() {
        assert_eq!(categorize("_"), Some(Identifier));
        assert_eq!(categorize("abcdefghij"), Some(Identifier));
        assert_eq!(categorize("abcdefghijk"), None);
        assert_eq!(categorize("a_1"), Some(Identifier));
        assert_eq!(categorize("1abc"), None);
        assert_eq!(categorize("ñandu"), None);
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(categorize("0x1f"), Some(Hexadecimal));
        assert_eq!(categorize("0XAB"), Some(Hexadecimal));
        assert_eq!(categorize("0x"), None);
        assert_eq!(categorize("0xG1"), None);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(categorize("\"hola\""), Some(StringLiteral));
        assert_eq!(categorize("\"\""), Some(StringLiteral));
        assert_eq!(categorize("\""), None);
        assert_eq!(categorize("\"open"), None);
    }

    #[test]
    fn test_multi_word_string_is_not_recognized() {
        let tokens = classify("\"hola mundo\"");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_comments() {
        assert_eq!(categorize("¿nota"), Some(LineComment));
        assert_eq!(categorize("¿"), Some(LineComment));
        assert_eq!(categorize("#*nota*#"), Some(BlockComment));
        assert_eq!(categorize("#**#"), Some(BlockComment));
        assert_eq!(categorize("#*#"), None);
        assert_eq!(categorize("#*open"), None);
    }

    #[test]
    fn test_custom_comment_markers() {
        let config = LexiconConfig {
            line_comment_marker: "//".to_string(),
            block_comment_open: "/*".to_string(),
            block_comment_close: "*/".to_string(),
            ..LexiconConfig::default()
        };
        let lexicon = Lexicon::new(&config);
        let tokens = classify_with("//note /*x*/ ¿old", &lexicon);
        let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category).collect();
        assert_eq!(categories, vec![LineComment, BlockComment]);
    }

    #[test]
    fn test_literal_rules_take_precedence() {
        assert_eq!(categorize("-"), Some(ArithmeticOperator));
        assert_eq!(categorize("/"), Some(ArithmeticOperator));

        // A line comment marker that collides with a literal still loses to the literal.
        let config = LexiconConfig {
            line_comment_marker: "/".to_string(),
            ..LexiconConfig::default()
        };
        let lexicon = Lexicon::new(&config);
        let token = classify_fragment("/", &lexicon).unwrap();
        assert_eq!(token.category, ArithmeticOperator);
        let token = classify_fragment("/note", &lexicon).unwrap();
        assert_eq!(token.category, LineComment);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let tokens = classify("a a ; a");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "a", ";", "a"]);
    }

    #[test]
    fn test_token_count_never_exceeds_fragment_count() {
        let inputs = [
            "",
            "x = 5 + 3 ;",
            "@@ ## $$",
            "if (x >= 10.5) { return \"ok\" ; }",
            "¿comentario #*bloque*# 0x1G 12.5.6 abcdefghijklmnop",
        ];
        for input in inputs {
            let report = lex_report(input, default_lexicon());
            let fragments = split_fragments(input).count();
            assert!(report.tokens.len() <= fragments);
            assert_eq!(report.tokens.len() + report.dropped.len(), fragments);
        }
    }

    #[test]
    fn test_lex_report_records_dropped_fragments() {
        let report = lex_report("x @@ y $", default_lexicon());
        assert_eq!(report.dropped, vec!["@@".to_string(), "$".to_string()]);
        assert_eq!(report.tokens, classify("x @@ y $"));
    }
}
