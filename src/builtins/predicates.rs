//! Type predicates and boolean operators.

use derivative::Derivative;

use super::operation::{truth, Operation, Ret};
use crate::sexp::{HeapSexp, Sexp};


fn is_boolean(sexp: &Sexp) -> bool {
    matches!(sexp, Sexp::Symbol(s) if s.is_boolean())
}

fn is_true(sexp: &Sexp) -> bool {
    matches!(sexp, Sexp::Symbol(s) if s.is_true())
}

fn is_false(sexp: &Sexp) -> bool {
    matches!(sexp, Sexp::Symbol(s) if s.is_false())
}


/// True while every operand so far matches `test`.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct AllMatch {
    #[derivative(Debug = "ignore")]
    test: fn(&Sexp) -> bool,
    holds: bool,
}

impl AllMatch {
    pub fn number() -> Self {
        Self {
            test: |sexp| matches!(sexp, Sexp::Integer(_)),
            holds: true,
        }
    }

    pub fn boolean() -> Self {
        Self {
            test: is_boolean,
            holds: true,
        }
    }
}

impl Operation for AllMatch {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.holds = self.holds && (self.test)(operand);
        }
        Ok(truth(self.holds))
    }
}


/// Predicate over the latest operand only.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Latest {
    #[derivative(Debug = "ignore")]
    test: fn(&Sexp) -> bool,
    curr: bool,
}

impl Latest {
    /// Nil, or the bare quote symbol.
    pub fn null() -> Self {
        Self {
            test: |sexp| sexp.is_nil() || sexp.is_symbol("quote"),
            curr: true,
        }
    }

    pub fn list() -> Self {
        Self {
            test: |sexp| sexp.is_symbol("quote") || sexp.is_proper_list(),
            curr: true,
        }
    }

    /// Any non-nil cell, dotted or not.
    pub fn pair() -> Self {
        Self {
            test: |sexp| matches!(sexp, Sexp::Cons(c) if !c.is_nil()),
            curr: false,
        }
    }
}

impl Operation for Latest {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = (self.test)(operand);
        }
        Ok(truth(self.curr))
    }
}


/// Negates a boolean; anything else is treated as true and yields `#f`.
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct Not {
    #[derivative(Default(value = "true"))]
    curr: bool,
}

impl Operation for Not {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = is_false(operand);
        }
        Ok(truth(self.curr))
    }
}


/// Yields the last operand unless one was `#f`.
#[derive(Debug, Default)]
pub struct And {
    last: Option<HeapSexp>,
    failed: bool,
}

impl Operation for And {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            if is_false(operand) {
                self.failed = true;
            }
            self.last = Some(operand.clone());
        }
        if self.failed {
            return Ok(truth(false));
        }
        Ok(self.last.clone().unwrap_or_else(|| truth(true)))
    }
}


/// Yields the last operand unless one was `#t`.
#[derive(Debug, Default)]
pub struct Or {
    last: Option<HeapSexp>,
    succeeded: bool,
}

impl Operation for Or {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            if is_true(operand) {
                self.succeeded = true;
            }
            self.last = Some(operand.clone());
        }
        if self.succeeded {
            return Ok(truth(true));
        }
        Ok(self.last.clone().unwrap_or_else(|| truth(false)))
    }
}


#[cfg(test)]
#[path = "./predicates_test.rs"]
mod predicates_test;
