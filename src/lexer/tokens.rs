use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

/// Text reported by [`Token::get_text`] for end-of-line tokens.
pub const EOL: &str = "\\n";

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Number(i32),
    String(String),
    /// Identifiers, keywords and operators all share this kind.
    Identifier(String),
    EndOfLine,
    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "Number",
            TokenKind::String(_) => "String",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::EndOfFile => "EndOfFile",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified unit of source text.
///
/// The kind is fixed at construction; the line is 1-based, or `-1` for
/// the end-of-file token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    line: i32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.line, self.kind, self.get_text())
    }
}

impl Token {
    /// Parses a run of ASCII digits into a number token.
    ///
    /// Fails with `NumericOverflow` when the literal does not fit in an `i32`.
    pub fn number(line: i32, literal: &str) -> Result<Token, ErrorImpl> {
        literal
            .parse::<i32>()
            .map(|value| MK_TOKEN!(TokenKind::Number(value), line))
            .map_err(|_| ErrorImpl::NumericOverflow {
                token: literal.to_string(),
            })
    }

    /// Builds a string token from the raw literal, quotes included.
    pub fn string(line: i32, literal: &str) -> Token {
        MK_TOKEN!(TokenKind::String(decode_string_literal(literal)), line)
    }

    pub fn identifier(line: i32, text: &str) -> Token {
        MK_TOKEN!(TokenKind::Identifier(text.to_string()), line)
    }

    pub fn eol(line: i32) -> Token {
        MK_TOKEN!(TokenKind::EndOfLine, line)
    }

    pub fn eof() -> Token {
        MK_TOKEN!(TokenKind::EndOfFile, -1)
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn get_line_number(&self) -> i32 {
        self.line
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, TokenKind::String(_))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier(_))
    }

    pub fn is_eol(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    pub fn get_number(&self) -> Result<i32, Error> {
        match self.kind {
            TokenKind::Number(value) => Ok(value),
            _ => Err(Error::new(
                ErrorImpl::TypeMismatch {
                    expected: TokenKind::Number(0).name().to_string(),
                    received: self.kind.name().to_string(),
                },
                Position {
                    line: self.line,
                    ..Position::null()
                },
            )),
        }
    }

    /// Canonical text of the token. Numbers are re-rendered in decimal, so
    /// `007` reads back as `7`.
    pub fn get_text(&self) -> String {
        match &self.kind {
            TokenKind::Number(value) => value.to_string(),
            TokenKind::String(text) | TokenKind::Identifier(text) => text.clone(),
            TokenKind::EndOfLine => String::from(EOL),
            TokenKind::EndOfFile => String::new(),
        }
    }
}

/// Strips the surrounding quotes from `literal` and resolves `\"`, `\\`
/// and `\n`. Any other character, including a lone trailing backslash, is
/// kept as written.
pub fn decode_string_literal(literal: &str) -> String {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();

    let mut result = String::new();
    let mut chars = chars.peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('"') | Some('\\') => {
                    if let Some(next_ch) = chars.next() {
                        result.push(next_ch);
                    }
                }
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                _ => result.push(ch),
            }
        } else {
            result.push(ch);
        }
    }

    result
}
