//! Module for printing S-exps in canonical list notation.

use std::fmt;

use crate::sexp::{Cons, Sexp};


/// Text of an evaluation result.
///
/// When the top-level form was a quote form its payload is printed as read,
/// otherwise the evaluated result is.
pub fn serialize(result: &Sexp, original: Option<&Sexp>) -> String {
    match original.and_then(Sexp::quoted) {
        Some(payload) => payload.to_string(),
        None => result.to_string(),
    }
}

pub fn write_sexp(f: &mut fmt::Formatter, sexp: &Sexp) -> fmt::Result {
    match sexp {
        Sexp::Integer(i) => write!(f, "{}", i),
        Sexp::Symbol(symbol) => write!(f, "{}", symbol),
        Sexp::Cons(cons) => write_cons(f, sexp, cons),
    }
}

fn write_cons(f: &mut fmt::Formatter, sexp: &Sexp, cons: &Cons) -> fmt::Result {
    if let (Some(Sexp::Symbol(symbol)), Some(payload)) = (cons.car(), cons.cdr()) {
        if symbol.is_quote() {
            write!(f, "(quote ")?;
            write_sexp(f, payload)?;
            return write!(f, ")");
        }
    }

    write!(f, "(")?;
    for (i, (item, from_cons)) in sexp.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        if !from_cons {
            write!(f, ". ")?;
        }
        write_sexp(f, item)?;
    }
    write!(f, ")")
}


#[cfg(test)]
#[path = "./serializer_test.rs"]
mod serializer_test;
