//! Lexico: a teaching lexical scanner for a small instructional language.
//!
//! Source text is split on whitespace and every fragment is classified by an
//! ordered rule chain. See [`lexer::classify`].

pub mod app;
pub mod engine;
pub mod input;
pub mod lexer;
pub mod ui;

pub use lexer::{classify, Token, TokenCategory};
