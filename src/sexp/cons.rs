use std::rc::Rc;

use super::sexp::{HeapSexp, Sexp};


/// Cons cell. Either slot may be absent; a cell with both slots absent is nil.
///
/// Cells never change once built; transformations construct new cells and
/// share the untouched HeapSexps.
#[derive(Clone, Debug, Default)]
pub struct Cons {
    car: Option<HeapSexp>,
    cdr: Option<HeapSexp>,
}

impl Cons {
    pub fn new(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> Option<&Sexp> {
        self.car.as_deref()
    }

    pub fn cdr(&self) -> Option<&Sexp> {
        self.cdr.as_deref()
    }

    /// Shared handle to the car, for building new structure around it.
    pub fn car_heap(&self) -> Option<&HeapSexp> {
        self.car.as_ref()
    }

    /// Shared handle to the cdr, for building new structure around it.
    pub fn cdr_heap(&self) -> Option<&HeapSexp> {
        self.cdr.as_ref()
    }

    pub fn is_nil(&self) -> bool {
        self.car.is_none() && self.cdr.is_none()
    }
}


// Both impls walk the cdr spine in a loop; only cars recurse, and car nesting
// is bounded by the parser's depth limit.
impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            if lhs.car != rhs.car {
                return false;
            }
            match (lhs.cdr(), rhs.cdr()) {
                (Some(Sexp::Cons(l)), Some(Sexp::Cons(r))) => {
                    lhs = l;
                    rhs = r;
                }
                (l, r) => return l == r,
            }
        }
    }
}

impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = self.cdr.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(Sexp::Cons(mut cons)) => cons.cdr.take(),
                // Shared or atomic; nothing more to unlink here.
                _ => None,
            };
        }
    }
}
