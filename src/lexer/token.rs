use std::fmt;

/// Lexical category assigned to a recognized fragment.
///
/// Declaration order is the order used by category summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    NaturalNumber,
    RealNumber,
    Identifier,
    ReservedWord,
    ArithmeticOperator,
    ComparisonOperator,
    LogicalOperator,
    AssignmentOperator,
    IncrementOperator,
    Parenthesis,
    Brace,
    Terminator,
    Separator,
    Hexadecimal,
    StringLiteral,
    LineComment,
    BlockComment,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 17] = [
        TokenCategory::NaturalNumber,
        TokenCategory::RealNumber,
        TokenCategory::Identifier,
        TokenCategory::ReservedWord,
        TokenCategory::ArithmeticOperator,
        TokenCategory::ComparisonOperator,
        TokenCategory::LogicalOperator,
        TokenCategory::AssignmentOperator,
        TokenCategory::IncrementOperator,
        TokenCategory::Parenthesis,
        TokenCategory::Brace,
        TokenCategory::Terminator,
        TokenCategory::Separator,
        TokenCategory::Hexadecimal,
        TokenCategory::StringLiteral,
        TokenCategory::LineComment,
        TokenCategory::BlockComment,
    ];

    /// Stable label shown by reports and the terminal front end.
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::NaturalNumber => "NaturalNumber",
            TokenCategory::RealNumber => "RealNumber",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::ReservedWord => "ReservedWord",
            TokenCategory::ArithmeticOperator => "ArithmeticOperator",
            TokenCategory::ComparisonOperator => "ComparisonOperator",
            TokenCategory::LogicalOperator => "LogicalOperator",
            TokenCategory::AssignmentOperator => "AssignmentOperator",
            TokenCategory::IncrementOperator => "IncrementOperator",
            TokenCategory::Parenthesis => "Parenthesis",
            TokenCategory::Brace => "Brace",
            TokenCategory::Terminator => "Terminator",
            TokenCategory::Separator => "Separator",
            TokenCategory::Hexadecimal => "Hexadecimal",
            TokenCategory::StringLiteral => "StringLiteral",
            TokenCategory::LineComment => "LineComment",
            TokenCategory::BlockComment => "BlockComment",
        }
    }

    /// Returns true for the categories produced by exact-match literal rules.
    pub fn is_literal_rule(&self) -> bool {
        matches!(
            self,
            TokenCategory::ArithmeticOperator
                | TokenCategory::ComparisonOperator
                | TokenCategory::LogicalOperator
                | TokenCategory::AssignmentOperator
                | TokenCategory::IncrementOperator
                | TokenCategory::Parenthesis
                | TokenCategory::Brace
                | TokenCategory::Terminator
                | TokenCategory::Separator
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified fragment: its category and the fragment text as it appeared in the input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
}

impl Token {
    pub fn new(category: TokenCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}
