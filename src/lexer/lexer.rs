use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_PATTERN,
};

use super::{
    source::{LineReader, LineSource},
    tokens::Token,
};

pub type RegexHandler = fn(&mut Scanner, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Matchers tried in order at each column; the first hit wins, so
    /// two-character operators must come before single punctuation.
    /// Whitespace is ASCII only; other spacing characters are bad tokens.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(r"[ \t\x0B\x0C\r]+", skip_handler),
        MK_PATTERN!(r"//.*", skip_handler),
        MK_PATTERN!(r"[0-9]+", number_handler),
        MK_PATTERN!(r#""(?:\\"|\\\\|\\n|[^"])*""#, string_handler),
        MK_PATTERN!(r"[A-Z_a-z][A-Z_a-z0-9]*", symbol_handler),
        MK_PATTERN!(r"==|<=|>=|&&|\|\|", symbol_handler),
        MK_PATTERN!(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_{|}~]"##, symbol_handler),
    ];
}

/// Pulls lines from a [`LineSource`] on demand and hands out tokens with
/// bounded lookahead.
///
/// Each line is read and tokenized exactly once, however often its tokens
/// are peeked. A scanner must not be shared between threads, and must not
/// be used again after it has returned an error.
pub struct Scanner {
    queue: VecDeque<Token>,
    has_more: bool,
    source: Box<dyn LineSource>,
    file: Rc<String>,
    line: i32,
    pos: usize,
}

impl Scanner {
    pub fn new(source: impl LineSource + 'static, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        debug!(file = %file_name, "created scanner");

        Scanner {
            queue: VecDeque::new(),
            has_more: true,
            source: Box::new(source),
            file: file_name,
            line: 0,
            pos: 0,
        }
    }

    pub fn from_source(source: String, file: Option<String>) -> Scanner {
        Scanner::new(LineReader::from_string(source), file)
    }

    /// Removes and returns the next token, or the end-of-file token once
    /// the source is exhausted.
    pub fn read(&mut self) -> Result<Token, Error> {
        if self.ensure(0)? {
            if let Some(token) = self.queue.pop_front() {
                return Ok(token);
            }
        }

        Ok(Token::eof())
    }

    /// Returns the token `k` positions ahead without consuming anything.
    pub fn peek(&mut self, k: usize) -> Result<Token, Error> {
        if self.ensure(k)? {
            if let Some(token) = self.queue.get(k) {
                return Ok(token.clone());
            }
        }

        Ok(Token::eof())
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    fn ensure(&mut self, n: usize) -> Result<bool, Error> {
        while n >= self.queue.len() {
            if !self.has_more {
                return Ok(false);
            }
            self.read_line()?;
        }

        Ok(true)
    }

    fn read_line(&mut self) -> Result<(), Error> {
        let line = match self.source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!(file = %self.file, lines = self.source.line_number(), "source exhausted");
                self.has_more = false;
                return Ok(());
            }
            Err(err) => {
                return Err(Error::new(
                    ErrorImpl::Io {
                        message: err.to_string(),
                    },
                    Position::new(self.source.line_number() + 1, 0, Rc::clone(&self.file)),
                ))
            }
        };

        self.line = self.source.line_number();
        self.pos = 0;
        let queued = self.queue.len();

        while self.pos < line.len() {
            let remainder = &line[self.pos..];
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(remainder) {
                    (pattern.handler)(self, found.as_str())?;
                    self.pos += found.end();
                    matched = true;
                    break;
                }
            }

            if !matched {
                let token = remainder.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::LexicalError { token },
                    Position::new(self.line, self.pos, Rc::clone(&self.file)),
                ));
            }
        }

        self.queue.push_back(Token::eol(self.line));
        trace!(line = self.line, tokens = self.queue.len() - queued, "tokenized line");

        Ok(())
    }

    fn push(&mut self, token: Token) {
        self.queue.push_back(token);
    }
}

fn skip_handler(_scanner: &mut Scanner, _matched: &str) -> Result<(), Error> {
    Ok(())
}

fn number_handler(scanner: &mut Scanner, matched: &str) -> Result<(), Error> {
    let token = Token::number(scanner.line, matched).map_err(|error| {
        Error::new(
            error,
            Position::new(scanner.line, scanner.pos, Rc::clone(&scanner.file)),
        )
    })?;

    scanner.push(token);
    Ok(())
}

fn string_handler(scanner: &mut Scanner, matched: &str) -> Result<(), Error> {
    scanner.push(Token::string(scanner.line, matched));
    Ok(())
}

fn symbol_handler(scanner: &mut Scanner, matched: &str) -> Result<(), Error> {
    scanner.push(Token::identifier(scanner.line, matched));
    Ok(())
}

/// Scans all of `source` into a vector terminated by the end-of-file token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::from_source(source, file);
    let mut tokens = vec![];

    loop {
        let token = scanner.read()?;
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
