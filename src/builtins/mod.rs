//! Registry of built-in operators.
//!
//! The operator table is the language: each name maps to a factory for a
//! fresh Operation, created once per appearance in a form.

use std::collections::HashMap;

use lazy_static::lazy_static;

mod lists;
mod numeric;
mod operation;
mod predicates;

pub use operation::{Factory, Operation, Ret};

use lists::{Access, ListRef, ListTail, MakeCons, MakeList, Quote};
use numeric::{Abs, Add, Compare, Comparison, Div, Max, Min, Mul, Sub};
use predicates::{AllMatch, And, Latest, Not, Or};


macro_rules! operations {
    [$($n:tt : $x:expr),+ $(,)?] => {
        {
            let mut m: HashMap<&'static str, Factory> = HashMap::new();
            $(
                m.insert($n, || -> Box<dyn Operation> { Box::new($x) });
            )+
            m
        }
    };
}

lazy_static! {
    static ref OPERATIONS: HashMap<&'static str, Factory> = operations![
        "+": Add::default(),
        "-": Sub::default(),
        "*": Mul::default(),
        "/": Div::default(),
        "max": Max::default(),
        "min": Min::default(),
        "abs": Abs::default(),

        "=": Compare::new(Comparison::Eq),
        "<": Compare::new(Comparison::Lt),
        "<=": Compare::new(Comparison::Le),
        ">": Compare::new(Comparison::Gt),
        ">=": Compare::new(Comparison::Ge),

        "number?": AllMatch::number(),
        "boolean?": AllMatch::boolean(),
        "null?": Latest::null(),
        "list?": Latest::list(),
        "pair?": Latest::pair(),
        "not": Not::default(),
        "and": And::default(),
        "or": Or::default(),

        "cons": MakeCons::default(),
        "car": Access::car(),
        "cdr": Access::cdr(),
        "list": MakeList::default(),
        "list-ref": ListRef::default(),
        "list-tail": ListTail::default(),
        "quote": Quote::default(),
    ];
}


/// Fresh instance of the named operator, if there is one.
pub fn create(name: &str) -> Option<Box<dyn Operation>> {
    OPERATIONS.get(name).map(|factory| factory())
}

pub fn is_operator(name: &str) -> bool {
    OPERATIONS.contains_key(name)
}

/// Operator names in sorted order.
pub fn names() -> Vec<&'static str> {
    let mut names = OPERATIONS.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}
