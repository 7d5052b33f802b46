//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored RegexPattern entry for the matcher table

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr) => {
        Token {
            kind: $kind,
            line: $line,
        }
    };
}

/// Creates a RegexPattern that only matches at the start of the remaining text.
///
/// The pattern is a literal and is compiled once when the matcher table is
/// first used.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("[0-9]+", number_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($pattern:literal, $handler:expr) => {
        RegexPattern {
            // only ever expanded with fixed literals, covered by the lexer tests
            regex: Regex::new(concat!("^(?:", $pattern, ")")).unwrap(),
            handler: $handler,
        }
    };
}
