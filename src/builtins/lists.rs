//! List construction and access.

use std::borrow::Cow;

use super::operation::{nil, Operation, Ret};
use crate::error::Error;
use crate::sexp::{ConsList, HeapSexp, Sexp};


/// Split a chain of cells into its elements and any non-nil improper tail.
fn split(list: &HeapSexp) -> (Vec<HeapSexp>, Option<HeapSexp>) {
    let mut elements = Vec::new();
    let mut curr = list.clone();
    loop {
        let next = match &*curr {
            Sexp::Cons(cons) => {
                if let Some(car) = cons.car_heap() {
                    elements.push(car.clone());
                }
                match cons.cdr_heap() {
                    Some(cdr) if !cdr.is_nil() => cdr.clone(),
                    _ => return (elements, None),
                }
            }
            _ => return (elements, Some(curr.clone())),
        };
        curr = next;
    }
}


#[derive(Debug, Default)]
pub struct MakeCons {
    car: Option<HeapSexp>,
}

impl Operation for MakeCons {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        let operand = match operand {
            Some(operand) => operand,
            None => return Ok(nil()),
        };
        match &self.car {
            None => {
                self.car = Some(operand.clone());
                Ok(operand.clone())
            }
            Some(car) => {
                let mut list = ConsList::new();
                list.append(car.clone());
                Ok(list.release_with_tail(Some(operand.clone())))
            }
        }
    }
}


/// `car` or `cdr`.
#[derive(Debug)]
pub struct Access {
    name: &'static str,
    take_car: bool,
    seen: bool,
}

impl Access {
    pub fn car() -> Self {
        Self {
            name: "car",
            take_car: true,
            seen: false,
        }
    }

    pub fn cdr() -> Self {
        Self {
            name: "cdr",
            take_car: false,
            seen: false,
        }
    }
}

impl Operation for Access {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        let operand = match operand {
            Some(operand) => operand,
            None => return Ok(nil()),
        };
        self.seen = true;

        match &**operand {
            Sexp::Cons(cons) => {
                let slot = if self.take_car {
                    cons.car_heap()
                } else {
                    cons.cdr_heap()
                };
                Ok(slot.cloned().unwrap_or_else(nil))
            }
            _ if self.take_car => Ok(operand.clone()),
            _ => Ok(nil()),
        }
    }

    fn finish(&mut self, last: HeapSexp) -> Ret {
        if !self.seen {
            return eval_err!(MissingOperand(self.name));
        }
        Ok(last)
    }
}


/// Collects operands; the list is linked once, when the context closes.
#[derive(Debug, Default)]
pub struct MakeList {
    elements: Vec<HeapSexp>,
}

impl Operation for MakeList {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.elements.push(operand.clone());
        }
        Ok(nil())
    }

    fn finish(&mut self, _last: HeapSexp) -> Ret {
        Ok(self.elements.drain(..).collect::<ConsList>().release())
    }
}


/// Shared state of `list-ref` and `list-tail`.
///
/// Takes a list and an integer index in either order. Given only a list, the
/// last element of that list is taken as the index, which is how a nested
/// `(list ...)` context hands both over in one value.
#[derive(Debug, Default)]
struct Indexed {
    list: Option<HeapSexp>,
    index: Option<i64>,
}

impl Indexed {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            match &**operand {
                Sexp::Integer(i) => self.index = Some(*i),
                Sexp::Cons(_) => self.list = Some(operand.clone()),
                _ => {
                    return eval_err!(InvalidArgument {
                        given: (**operand).clone(),
                        expected: Cow::Borrowed("a list or an index"),
                    })
                }
            }
        }
        Ok(self.list.clone().unwrap_or_else(nil))
    }

    /// Elements, improper tail, and a bounds-checked index (which may equal
    /// the element count).
    fn resolve(
        &self,
        name: &'static str,
    ) -> Result<(Vec<HeapSexp>, Option<HeapSexp>, usize), Error> {
        let list = match &self.list {
            Some(list) => list,
            None => return eval_err!(MissingOperand(name)),
        };
        let (mut elements, tail) = split(list);

        let index = match self.index {
            Some(index) => index,
            None => match elements.pop() {
                Some(last) => match &*last {
                    Sexp::Integer(i) => *i,
                    _ => {
                        return eval_err!(InvalidArgument {
                            given: (*last).clone(),
                            expected: Cow::Borrowed("an index"),
                        })
                    }
                },
                None => return eval_err!(MissingOperand(name)),
            },
        };

        if index < 0 || index as usize > elements.len() {
            return eval_err!(IndexOutOfRange {
                index,
                len: elements.len(),
            });
        }
        Ok((elements, tail, index as usize))
    }
}


#[derive(Debug, Default)]
pub struct ListRef(Indexed);

impl Operation for ListRef {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        self.0.apply(operand)
    }

    fn finish(&mut self, _last: HeapSexp) -> Ret {
        let (elements, _, index) = self.0.resolve("list-ref")?;
        match elements.get(index) {
            Some(elem) => Ok(elem.clone()),
            None => eval_err!(IndexOutOfRange {
                index: index as i64,
                len: elements.len(),
            }),
        }
    }
}


#[derive(Debug, Default)]
pub struct ListTail(Indexed);

impl Operation for ListTail {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        self.0.apply(operand)
    }

    fn finish(&mut self, _last: HeapSexp) -> Ret {
        let (elements, tail, index) = self.0.resolve("list-tail")?;
        if index == elements.len() {
            return Ok(tail.unwrap_or_else(nil));
        }
        Ok(elements
            .into_iter()
            .skip(index)
            .collect::<ConsList>()
            .release_with_tail(tail))
    }
}


/// Identity.
#[derive(Debug, Default)]
pub struct Quote {
    curr: Option<HeapSexp>,
}

impl Operation for Quote {
    fn apply(&mut self, operand: Option<&HeapSexp>) -> Ret {
        if let Some(operand) = operand {
            self.curr = Some(operand.clone());
        }
        Ok(self.curr.clone().unwrap_or_else(nil))
    }
}


#[cfg(test)]
#[path = "./lists_test.rs"]
mod lists_test;
