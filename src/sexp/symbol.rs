use std::borrow::Borrow;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;


pub const TRUE: &str = "#t";
pub const FALSE: &str = "#f";
pub const QUOTE: &str = "quote";

/// String which can be used as an identifier.
///
/// A symbol starts with a letter or one of `<=>*#/` and continues with
/// alphanumerics or `<=>*#/!?-`. The lone signs `+` and `-` are also symbols.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    InvalidName(String),
}

lazy_static! {
    static ref SYMBOL: Regex = Regex::new(r"^(?:[+-]|[A-Za-z<=>*#/][A-Za-z0-9<=>*#/!?\-]*)$").unwrap();
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        let s = sym.as_ref();
        if s.is_empty() {
            return Err(SymbolError::Empty);
        }
        if !SYMBOL.is_match(s) {
            return Err(SymbolError::InvalidName(s.to_string()));
        }
        Ok(Symbol(s.to_string()))
    }

    /// Build a symbol without checking the name.
    ///
    /// Only used when reifying errors, whose names need not be readable.
    pub(crate) fn unchecked<S: Into<String>>(sym: S) -> Symbol {
        Symbol(sym.into())
    }

    pub fn truth(value: bool) -> Symbol {
        Symbol(if value { TRUE } else { FALSE }.to_string())
    }

    pub fn quote() -> Symbol {
        Symbol(QUOTE.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_true(&self) -> bool {
        self.0 == TRUE
    }

    pub fn is_false(&self) -> bool {
        self.0 == FALSE
    }

    pub fn is_boolean(&self) -> bool {
        self.is_true() || self.is_false()
    }

    pub fn is_quote(&self) -> bool {
        self.0 == QUOTE
    }

    /// Symbols ending in '?' name predicates.
    pub fn is_predicate(&self) -> bool {
        self.0.ends_with('?')
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::Empty => write!(f, "empty symbol"),
            SymbolError::InvalidName(name) => write!(f, "invalid symbol name \"{}\"", name),
        }
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
