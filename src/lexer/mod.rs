pub mod classifier;
pub mod lexicon;
pub mod splitter;
pub mod token;

pub use classifier::{classify, classify_fragment, classify_with, lex_report, LexReport};
pub use lexicon::{default_lexicon, Lexicon};
pub use splitter::{normalize_whitespace, split_fragments};
pub use token::{Token, TokenCategory};
