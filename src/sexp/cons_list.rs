//! Module for constructing lists as S-exps front to back.
//!
//! Cells are immutable once shared, so elements are buffered and the chain is
//! linked from the tail when the list is released.

use std::rc::Rc;

use crate::sexp::{Cons, HeapSexp, Sexp};

#[derive(Debug, Default)]
pub struct ConsList {
    elements: Vec<HeapSexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn append<T: Into<HeapSexp>>(&mut self, val: T) {
        self.elements.push(val.into());
    }

    pub fn release(self) -> HeapSexp {
        self.release_with_tail(None)
    }

    /// Release the list with `tail` as the cdr of the final cell.
    ///
    /// A nil tail is dropped so that `(a . ())` comes out as `(a)`.
    pub fn release_with_tail(self, tail: Option<HeapSexp>) -> HeapSexp {
        let tail = tail.filter(|t| !t.is_nil());
        if self.elements.is_empty() {
            return tail.unwrap_or_else(|| Rc::new(Sexp::nil()));
        }

        let mut rest = tail;
        for elem in self.elements.into_iter().rev() {
            rest = Some(Rc::new(Sexp::Cons(Cons::new(Some(elem), rest))));
        }
        // Non-empty, so at least one cell was linked.
        rest.unwrap_or_else(|| Rc::new(Sexp::nil()))
    }
}

impl<T: Into<HeapSexp>> std::iter::FromIterator<T> for ConsList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ConsList {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}
