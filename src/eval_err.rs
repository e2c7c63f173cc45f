use std::borrow::Cow;
use std::fmt;

use crate::error::ErrorKind;
use crate::sexp::{Sexp, Symbol};


/// Runtime failures raised while validating or reducing a form.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    UnboundSymbol(Symbol),
    NotEvaluable,
    MissingOperand(&'static str),
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
    ArithmeticError(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


fn name(s: &str) -> Sexp {
    Symbol::unchecked(s).into()
}

impl ErrorKind for EvalErr {
    fn reify(&self) -> Sexp {
        let inner = match self {
            Self::InvalidArgument { given, expected } => list!(
                name("InvalidArgument"),
                list!(name("given"), given.clone()),
                list!(name("expected"), name(expected)),
            ),
            Self::InvalidSexp(val) => list!(name("InvalidSexp"), val.clone()),
            Self::WrongArgumentCount { given, expected } => list!(
                name("WrongArgumentCount"),
                list!(name("given"), *given as i64),
                list!(name("expected"), name(&expected.to_string())),
            ),
            Self::UnboundSymbol(symbol) => list!(name("UnboundSymbol"), symbol.clone()),
            Self::NotEvaluable => list!(name("NotEvaluable")),
            Self::MissingOperand(op) => list!(name("MissingOperand"), name(op)),
            Self::IndexOutOfRange { index, len } => list!(
                name("IndexOutOfRange"),
                list!(name("index"), *index),
                list!(name("len"), *len as i64),
            ),
            Self::ArithmeticError(msg) => list!(name("ArithmeticError"), name(msg)),
        };
        Sexp::cons(Some(name("EvalErr").into()), Some(inner)).into()
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(exactly) => write!(f, "{}", exactly),
            Self::AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}
