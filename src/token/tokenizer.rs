//! Module for breaking source text into tokens.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;

use super::token::{Token, TokenKind};
use crate::error::{Error, ErrorKind};
use crate::sexp::{Sexp, Symbol, SymbolError};


/// Pull-based tokenizer over a borrowed string.
///
/// Every token produced is appended to a history which never shrinks, so the
/// parser can run whole-stream checks (bracket balance) over it.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,

    // Running bracket balance of the history; never below 0.
    depth: usize,
    opens: usize,
    closes: usize,
    lookahead: Option<Token>,
    tokens: Vec<Token>,
}

#[derive(Debug)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Debug)]
pub enum TokenizeErrorKind {
    InvalidChar(char),
    InvalidBoundary(char),
    IntegerOverflow(String),
    InvalidSymbol(SymbolError),
}


fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>' | '*' | '#' | '/')
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '<' | '=' | '>' | '*' | '#' | '/' | '!' | '?' | '-')
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '.' | '+' | '-')
}


impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 0,
            col: 0,

            depth: 0,
            opens: 0,
            closes: 0,
            lookahead: None,
            tokens: Default::default(),
        }
    }

    /// Consume the next token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if let Some(token) = self.lookahead.take() {
            return Ok(Some(token));
        }
        self.lex()
    }

    /// Look at the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<Option<&Token>, Error> {
        if self.lookahead.is_none() {
            self.lookahead = self.lex()?;
        }
        Ok(self.lookahead.as_ref())
    }

    pub fn is_end(&mut self) -> bool {
        if self.lookahead.is_some() {
            return false;
        }
        self.skip_whitespace();
        self.chars.peek().is_none()
    }

    /// Every token lexed so far, including a peeked one.
    pub fn all_tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Opening and closing brackets in the history.
    pub fn bracket_counts(&self) -> (usize, usize) {
        (self.opens, self.closes)
    }

    /// Lex the rest of the input into history, returning the number of tokens
    /// which were never consumed.
    pub fn tokenize_remaining(&mut self) -> Result<usize, Error> {
        let mut count = self.lookahead.take().map_or(0, |_| 1);
        while self.lex()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    fn lex(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace();
        let c = match self.chars.peek() {
            Some(c) => *c,
            None => return Ok(None),
        };

        let (line, col) = (self.line, self.col);
        let kind = match c {
            '(' => {
                self.bump();
                self.depth += 1;
                self.opens += 1;
                TokenKind::LeftParen
            }
            ')' => {
                self.bump();
                self.depth = self.depth.saturating_sub(1);
                self.closes += 1;
                TokenKind::RightParen
            }
            '\'' => {
                self.bump();
                TokenKind::Quote
            }
            '.' => {
                self.bump();
                TokenKind::Period
            }
            '+' | '-' => {
                self.bump();
                if self.chars.peek().map_or(false, char::is_ascii_digit) {
                    self.integer(c, line, col)?
                } else {
                    self.symbol(c.to_string(), line, col)?
                }
            }
            _ if c.is_ascii_digit() => self.integer('+', line, col)?,
            _ if is_symbol_start(c) => {
                let name = self.bump_while(is_symbol_char);
                self.check_boundary()?;
                self.symbol(name, line, col)?
            }
            _ => {
                return Err(self.error(line, col, TokenizeErrorKind::InvalidChar(c)));
            }
        };

        let token = Token::new(kind, line, col);
        trace!("token: {}", token);
        self.tokens.push(token.clone());
        Ok(Some(token))
    }

    fn integer(&mut self, sign: char, line: usize, col: usize) -> Result<TokenKind, Error> {
        let mut text = sign.to_string();
        text.push_str(&self.bump_while(|c| c.is_ascii_digit()));
        self.check_boundary()?;

        match text.parse::<i64>() {
            Ok(i) => Ok(TokenKind::Integer(i)),
            Err(_) => Err(self.error(line, col, TokenizeErrorKind::IntegerOverflow(text))),
        }
    }

    fn symbol(&mut self, name: String, line: usize, col: usize) -> Result<TokenKind, Error> {
        match Symbol::new(name) {
            Ok(symbol) => Ok(TokenKind::Symbol(symbol)),
            Err(err) => Err(self.error(line, col, TokenizeErrorKind::InvalidSymbol(err))),
        }
    }

    /// A literal or symbol must be followed by a symbol character, a
    /// delimiter, or the end of input.
    fn check_boundary(&mut self) -> Result<(), Error> {
        match self.chars.peek() {
            Some(&c) if !is_symbol_char(c) && !is_delimiter(c) => {
                let (line, col) = (self.line, self.col);
                Err(self.error(line, col, TokenizeErrorKind::InvalidBoundary(c)))
            }
            _ => Ok(()),
        }
    }

    fn skip_whitespace(&mut self) {
        self.bump_while(char::is_whitespace);
    }

    fn bump_while<P: Fn(char) -> bool>(&mut self, pred: P) -> String {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.bump();
        }
        s
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn error(&self, line: usize, col: usize, kind: TokenizeErrorKind) -> Error {
        Error::syntax(TokenizeError { line, col, kind })
    }
}


impl TokenizeError {
    pub fn kind(&self) -> &TokenizeErrorKind {
        &self.kind
    }
}

impl ErrorKind for TokenizeError {
    fn reify(&self) -> Sexp {
        list!(
            Symbol::unchecked("TokenizeError"),
            Symbol::unchecked(format!("{:?}", self.kind)),
            self.line as i64,
            self.col as i64,
        )
        .into()
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
