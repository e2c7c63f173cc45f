//! Arithmetic and comparison operators.
//!
//! All arithmetic is checked; overflow and division by zero are Runtime
//! errors rather than panics.

use std::rc::Rc;

use derivative::Derivative;

use super::operation::{integer, overflow, truth, Operation, Ret};
use crate::sexp::{HeapSexp, Sexp};


fn ret(i: i64) -> Ret {
    Ok(Rc::new(Sexp::Integer(i)))
}


#[derive(Debug, Default)]
pub struct Add {
    sum: i64,
}

impl Operation for Add {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.sum = match self.sum.checked_add(integer(operand)?) {
                Some(sum) => sum,
                None => return overflow(),
            };
        }
        ret(self.sum)
    }
}


/// The first operand is the base; each later one is subtracted from it.
#[derive(Debug, Default)]
pub struct Sub {
    base: Option<i64>,
}

impl Operation for Sub {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            let i = integer(operand)?;
            self.base = match self.base {
                None => Some(i),
                Some(base) => match base.checked_sub(i) {
                    Some(diff) => Some(diff),
                    None => return overflow(),
                },
            };
        }
        ret(self.base.unwrap_or(0))
    }
}


#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct Mul {
    #[derivative(Default(value = "1"))]
    product: i64,
}

impl Operation for Mul {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.product = match self.product.checked_mul(integer(operand)?) {
                Some(product) => product,
                None => return overflow(),
            };
        }
        ret(self.product)
    }
}


/// Integer division, truncating toward zero.
#[derive(Debug, Default)]
pub struct Div {
    base: Option<i64>,
}

impl Operation for Div {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            let i = integer(operand)?;
            self.base = match self.base {
                None => Some(i),
                Some(_) if i == 0 => return eval_err!(ArithmeticError("division by zero")),
                Some(base) => match base.checked_div(i) {
                    Some(quotient) => Some(quotient),
                    None => return overflow(),
                },
            };
        }
        ret(self.base.unwrap_or(1))
    }
}


#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct Max {
    #[derivative(Default(value = "i64::MIN"))]
    curr: i64,
}

impl Operation for Max {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = self.curr.max(integer(operand)?);
        }
        ret(self.curr)
    }
}


#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct Min {
    #[derivative(Default(value = "i64::MAX"))]
    curr: i64,
}

impl Operation for Min {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = self.curr.min(integer(operand)?);
        }
        ret(self.curr)
    }
}


#[derive(Debug, Default)]
pub struct Abs {
    curr: i64,
}

impl Operation for Abs {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = match integer(operand)?.checked_abs() {
                Some(abs) => abs,
                None => return overflow(),
            };
        }
        ret(self.curr)
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Comparison {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Chained comparison; false latches once any adjacent pair fails.
#[derive(Debug)]
pub struct Compare {
    by: Comparison,
    prev: Option<i64>,
    holds: bool,
}

impl Compare {
    pub fn new(by: Comparison) -> Self {
        Self {
            by,
            prev: None,
            holds: true,
        }
    }
}

impl Comparison {
    fn test(self, a: i64, b: i64) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Lt => a < b,
            Self::Le => a <= b,
            Self::Gt => a > b,
            Self::Ge => a >= b,
        }
    }
}

impl Operation for Compare {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            let i = integer(operand)?;
            if let Some(prev) = self.prev {
                self.holds = self.holds && self.by.test(prev, i);
            }
            self.prev = Some(i);
        }
        Ok(truth(self.holds))
    }
}


#[cfg(test)]
#[path = "./numeric_test.rs"]
mod numeric_test;
