use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::sexp::{HeapSexp, Sexp};


pub type Ret = Result<HeapSexp, Error>;

/// Stateful reducer bound to one built-in operator.
///
/// A fresh instance is created each time the operator appears in a form.
/// The evaluator calls `apply(None)` once to seed the result, then `apply`
/// with each operand in order; every call returns the current partial result.
/// An operation whose value only exists once all operands are in may return a
/// placeholder there and build the value in `finish`.
pub trait Operation: fmt::Debug {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret;

    /// Called once when the operator's context is closed, with the last
    /// result `apply` returned.
    fn finish(&mut self, last: HeapSexp) -> Ret {
        Ok(last)
    }
}

pub type Factory = fn() -> Box<dyn Operation>;


pub(super) fn nil() -> HeapSexp {
    Rc::new(Sexp::nil())
}

pub(super) fn truth(value: bool) -> HeapSexp {
    Rc::new(Sexp::truth(value))
}

pub(super) fn integer(operand: &Sexp) -> Result<i64, Error> {
    match operand {
        Sexp::Integer(i) => Ok(*i),
        _ => eval_err!(InvalidArgument {
            given: operand.clone(),
            expected: Cow::Borrowed("an integer"),
        }),
    }
}

pub(super) fn overflow<T>() -> Result<T, Error> {
    eval_err!(ArithmeticError("integer overflow"))
}
