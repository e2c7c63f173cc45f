use std::fmt;

use derive_getters::Getters;

use crate::sexp::Symbol;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Quote,
    Period,
    Integer(i64),
    Symbol(Symbol),
}

/// Token along with where it started in the input (0-indexed).
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Quote => write!(f, "'"),
            TokenKind::Period => write!(f, "."),
            TokenKind::Integer(i) => write!(f, "{}", i),
            TokenKind::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.kind, self.line, self.col)
    }
}
