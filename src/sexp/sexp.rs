//! Module for representing S-exps.

use std::fmt;
use std::rc::Rc;

use super::cons::Cons;
use super::cons_list::ConsList;
use super::symbol::Symbol;
use crate::serializer;


/// S-exp on the heap.
///
/// Nodes are immutable and shared between every tree that includes them, so a
/// node lives as long as its longest holder.
pub type HeapSexp = Rc<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Integer(i64),
    Symbol(Symbol),
    Cons(Cons),
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}


/// Returns the elements as a proper list HeapSexp.
///
/// Each element must be Into<Sexp>.
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut list = $crate::sexp::ConsList::new();
            $(
                list.append(<$crate::sexp::Sexp>::from($elem));
            )*
            list.release()
        }
    };
}


impl Sexp {
    pub fn nil() -> Sexp {
        Sexp::Cons(Cons::default())
    }

    pub fn cons(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Sexp {
        Sexp::Cons(Cons::new(car, cdr))
    }

    pub fn truth(value: bool) -> Sexp {
        Sexp::Symbol(Symbol::truth(value))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Cons(c) if c.is_nil())
    }

    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Sexp::Symbol(s) if s.as_str() == name)
    }

    /// Whether this is a quote form: a cell whose car is the symbol `quote`.
    pub fn is_quote_form(&self) -> bool {
        if let Sexp::Cons(cons) = self {
            if let Some(Sexp::Symbol(symbol)) = cons.car() {
                return symbol.is_quote();
            }
        }
        false
    }

    /// Payload of a quote form; an absent payload reads as nil.
    pub fn quoted(&self) -> Option<HeapSexp> {
        if !self.is_quote_form() {
            return None;
        }
        match self {
            Sexp::Cons(cons) => Some(
                cons.cdr_heap()
                    .cloned()
                    .unwrap_or_else(|| Rc::new(Sexp::nil())),
            ),
            _ => None,
        }
    }

    /// Whether this is nil or a chain of cells ending in an absent cdr.
    pub fn is_proper_list(&self) -> bool {
        self.iter().all(|(_, from_cons)| from_cons)
    }

    /// Iterate over the cars of a list.
    ///
    /// A non-nil improper tail is yielded last with from_cons set to false;
    /// an atom yields itself the same way.
    pub fn iter(&self) -> SexpIter<'_> {
        if self.is_nil() {
            return SexpIter { current: None };
        }
        SexpIter {
            current: Some(self),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Sexp::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is the atom ending an improper list (or
    // the iterated Sexp was itself an atom), and is necessarily the last
    // element.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = cons.cdr().filter(|cdr| !cdr.is_nil());
                match cons.car() {
                    Some(car) => Some((car, true)),
                    // Cells with an absent car only appear as nil.
                    None => self.next(),
                }
            }
            _ => {
                self.current = None;
                Some((sexp, false))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::nil()
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serializer::write_sexp(f, self)
    }
}


// From<T> impls.
impl From<i64> for Sexp {
    fn from(i: i64) -> Self {
        Sexp::Integer(i)
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Symbol(symbol)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<HeapSexp> for Sexp {
    fn from(sexp: HeapSexp) -> Self {
        Rc::try_unwrap(sexp).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let list = vec
            .into_iter()
            .map(|value| -> HeapSexp { Rc::new(value.into()) })
            .collect::<ConsList>();
        list.release().into()
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
