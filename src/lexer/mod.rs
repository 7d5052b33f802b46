//! Lexical analysis for line-oriented source text.
//!
//! - Line supply through the [`source::LineSource`] trait
//! - A priority-ordered table of regex matchers tried at each column
//! - Number, string, identifier and operator tokens; whitespace and `//`
//!   comments are dropped
//! - Lookahead over a token queue filled one line at a time

pub mod lexer;
pub mod source;
pub mod tokens;
