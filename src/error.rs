//! Representation of errors which can be reified as S-exps.
//!
//! Every failure in the pipeline is either a Syntax error (tokenizer, parser)
//! or a Runtime error (evaluator). The concrete ErrorKind is kept behind a
//! trait object so each stage can carry its own detail while callers only need
//! to match on the category.

use std::fmt;

use crate::sexp::Sexp;


/// Creates a Runtime Error wrapped in Err from an EvalErr variant.
#[macro_export]
macro_rules! eval_err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::runtime(
            $crate::eval_err::EvalErr::$($kind)+,
        ))
    };
}


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Syntax,
    Runtime,
}

pub struct Error {
    category: ErrorCategory,
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug /* fmt::Display auto-impled below */ {
    fn reify(&self) -> Sexp;
}


impl Error {
    pub fn syntax<K: ErrorKind + 'static>(kind: K) -> Self {
        Self {
            category: ErrorCategory::Syntax,
            kind: Box::new(kind),
        }
    }

    /// Prefer using eval_err! for convenience.
    pub fn runtime<K: ErrorKind + 'static>(kind: K) -> Self {
        Self {
            category: ErrorCategory::Runtime,
            kind: Box::new(kind),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn is_syntax(&self) -> bool {
        self.category == ErrorCategory::Syntax
    }

    pub fn is_runtime(&self) -> bool {
        self.category == ErrorCategory::Runtime
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }
}

impl PartialEq for Error {
    /// Compare category and reified kind.
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax Error"),
            ErrorCategory::Runtime => write!(f, "Runtime Error"),
        }
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reify())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?}", self.category, self.kind)
    }
}


impl std::error::Error for Error {}
