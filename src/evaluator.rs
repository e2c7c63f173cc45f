//! Module for evaluating a parsed form.
//!
//! The tree is flattened into leaves in pre-order, validated, and folded left
//! to right through operator contexts. Parentheses are not preserved by the
//! flattening: each operator leaf opens a context that collects every
//! following operand until the next operator leaf, and contexts are closed
//! innermost-first once the leaves run out. So `(+ 1 (* 2 3))` is 7 while
//! `(+ (* 2 3) 1)` folds the 1 into the product.

use std::borrow::Cow;
use std::rc::Rc;

use log::{debug, trace};

use crate::builtins::{self, Operation, Ret};
use crate::error::Error;
use crate::eval_err::ExpectedCount;
use crate::sexp::symbol::{FALSE, TRUE};
use crate::sexp::{HeapSexp, Sexp, Symbol};


/// Element of a flattened form.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    /// Integer or symbol.
    Atom(HeapSexp),
    /// Explicit empty list.
    Nil,
    /// Payload of a quote form, kept whole.
    Quote(HeapSexp),
}


/// Evaluate a parsed top-level form. Nothing to evaluate is a Runtime error.
pub fn evaluate(tree: Option<&HeapSexp>) -> Ret {
    let tree = match tree {
        Some(tree) => tree,
        None => return eval_err!(NotEvaluable),
    };

    let leaves = flatten(tree);
    debug!("flattened: {:?}", leaves);
    validate(tree, &leaves)?;

    let result = match leaves.first().and_then(Leaf::symbol) {
        Some(first) if first.as_str() == "and" => fold_and(&leaves[1..]),
        Some(first) if first.as_str() == "or" => fold_or(&leaves[1..]),
        _ => reduce(&leaves),
    }?;
    debug!("evaluated: {}", result);
    Ok(result)
}

/// Pre-order leaves of `tree`; quote forms are not descended into.
pub fn flatten(tree: &HeapSexp) -> Vec<Leaf> {
    let mut leaves = Vec::new();
    flatten_into(tree, &mut leaves);
    leaves
}

fn flatten_into(node: &HeapSexp, leaves: &mut Vec<Leaf>) {
    let mut curr = node.clone();
    loop {
        if let Some(payload) = curr.quoted() {
            leaves.push(Leaf::Quote(payload));
            return;
        }
        let cons = match &*curr {
            Sexp::Cons(cons) => cons,
            _ => {
                leaves.push(Leaf::Atom(curr.clone()));
                return;
            }
        };
        if cons.is_nil() {
            leaves.push(Leaf::Nil);
            return;
        }

        if let Some(car) = cons.car_heap() {
            flatten_into(car, leaves);
        }
        // Walk the spine iteratively; only cars recurse.
        let next = match cons.cdr_heap() {
            Some(cdr) if !cdr.is_nil() => cdr.clone(),
            _ => return,
        };
        curr = next;
    }
}


impl Leaf {
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Leaf::Atom(atom) => match &**atom {
                Sexp::Symbol(symbol) => Some(symbol),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.symbol()
            .map_or(false, |symbol| builtins::is_operator(symbol.as_str()))
    }

    fn is_integer(&self) -> bool {
        matches!(self, Leaf::Atom(atom) if atom.as_integer().is_some())
    }

    fn is_named(&self, names: &[&str]) -> bool {
        self.symbol()
            .map_or(false, |symbol| names.contains(&symbol.as_str()))
    }

    /// Value handed to an Operation.
    fn operand(&self) -> HeapSexp {
        match self {
            Leaf::Atom(atom) => atom.clone(),
            Leaf::Nil => Rc::new(Sexp::nil()),
            Leaf::Quote(payload) => payload.clone(),
        }
    }
}


fn validate(tree: &Sexp, leaves: &[Leaf]) -> Result<(), Error> {
    match leaves {
        [single] => check_bound(single)?,
        _ => {
            let exempt = leaves
                .first()
                .map_or(false, |first| first.is_named(&["not", "boolean?", "number?", "and", "or"]));
            if !exempt {
                check_symbols(leaves)?;
            }
        }
    }
    check_binary(leaves)?;
    check_unary(leaves)?;
    check_self_evaluating(tree, leaves)
}

/// A lone symbol must be a boolean or an operator.
fn check_bound(leaf: &Leaf) -> Result<(), Error> {
    if let Some(symbol) = leaf.symbol() {
        if !symbol.is_boolean() && !builtins::is_operator(symbol.as_str()) {
            return eval_err!(UnboundSymbol(symbol.clone()));
        }
    }
    Ok(())
}

/// In arithmetic context only operators and numbers may appear. Once a
/// predicate name or a quote has been seen, anything goes.
fn check_symbols(leaves: &[Leaf]) -> Result<(), Error> {
    let mut lenient = false;
    for leaf in leaves {
        match leaf {
            Leaf::Quote(_) => lenient = true,
            Leaf::Nil if !lenient => {
                return eval_err!(InvalidArgument {
                    given: Sexp::nil(),
                    expected: Cow::Borrowed("an operator or a number"),
                })
            }
            Leaf::Nil => {}
            Leaf::Atom(_) => {
                if let Some(symbol) = leaf.symbol() {
                    if symbol.is_predicate() {
                        lenient = true;
                    } else if !lenient && !leaf.is_operator() {
                        return eval_err!(UnboundSymbol(symbol.clone()));
                    }
                }
            }
        }
    }
    Ok(())
}

/// `-` and `/` need two integers right after them.
fn check_binary(leaves: &[Leaf]) -> Result<(), Error> {
    for (i, leaf) in leaves.iter().enumerate() {
        if leaf.is_named(&["-", "/"]) {
            let given = leaves[i + 1..]
                .iter()
                .take_while(|next| next.is_integer())
                .count();
            if given < 2 {
                return eval_err!(WrongArgumentCount {
                    given,
                    expected: ExpectedCount::AtLeast(2),
                });
            }
        }
    }
    Ok(())
}

/// `max`, `min`, `abs`, `not`, `car`, `cdr` need an operand; all but the
/// first two take exactly one. An operator counts as one operand and ends
/// the count.
fn check_unary(leaves: &[Leaf]) -> Result<(), Error> {
    for (i, leaf) in leaves.iter().enumerate() {
        if !leaf.is_named(&["max", "min", "abs", "not", "car", "cdr"]) {
            continue;
        }

        let rest = &leaves[i + 1..];
        let available = rest
            .iter()
            .take_while(|next| !matches!(next, Leaf::Nil))
            .count();
        if available == 0 {
            return eval_err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            });
        }

        if leaf.is_named(&["abs", "not", "car", "cdr"]) {
            let mut given = 0;
            for next in rest {
                if matches!(next, Leaf::Nil) {
                    break;
                }
                given += 1;
                if next.is_operator() {
                    break;
                }
            }
            if given > 1 {
                return eval_err!(WrongArgumentCount {
                    given,
                    expected: ExpectedCount::Exactly(1),
                });
            }
        }
    }
    Ok(())
}

/// Lists do not evaluate to themselves.
fn check_self_evaluating(tree: &Sexp, leaves: &[Leaf]) -> Result<(), Error> {
    if let Sexp::Cons(_) = tree {
        let evaluable = leaves
            .iter()
            .any(|leaf| leaf.is_operator() || matches!(leaf, Leaf::Quote(_)));
        if !evaluable {
            return eval_err!(InvalidSexp(tree.clone()));
        }
    }
    Ok(())
}


/// Fold leaves through operator contexts.
fn reduce(leaves: &[Leaf]) -> Ret {
    if let [leaf] = leaves {
        if !leaf.is_operator() {
            return Ok(leaf.operand());
        }
    }

    let mut operators: Vec<Box<dyn Operation>> = Vec::new();
    let mut results: Vec<HeapSexp> = Vec::new();
    for leaf in leaves {
        let created = leaf
            .symbol()
            .and_then(|symbol| builtins::create(symbol.as_str()));
        if let Some(mut operator) = created {
            let seed = operator.apply(None)?;
            trace!("open {:?}: {}", leaf, seed);
            results.push(seed);
            operators.push(operator);
            continue;
        }

        let operator = match operators.last_mut() {
            Some(operator) => operator,
            None => return eval_err!(NotEvaluable),
        };
        let result = operator.apply(Some(&leaf.operand()))?;
        trace!("apply {:?}: {}", leaf, result);
        match results.last_mut() {
            Some(top) => *top = result,
            None => return eval_err!(NotEvaluable),
        }
    }

    // Close contexts innermost-first, threading each result outward once.
    let mut inner: Option<HeapSexp> = None;
    while let Some(mut operator) = operators.pop() {
        let last = match results.pop() {
            Some(last) => last,
            None => return eval_err!(NotEvaluable),
        };
        let last = match inner.take() {
            Some(value) => operator.apply(Some(&value))?,
            None => last,
        };
        let result = operator.finish(last)?;
        trace!("close: {}", result);
        inner = Some(result);
    }

    match inner {
        Some(result) => Ok(result),
        None => eval_err!(NotEvaluable),
    }
}

/// Split leaves into independently evaluated groups: an operator with the
/// operands up to the next operator, or a single operand.
fn groups(leaves: &[Leaf]) -> Vec<&[Leaf]> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < leaves.len() {
        let len = if leaves[i].is_operator() {
            1 + leaves[i + 1..]
                .iter()
                .take_while(|leaf| !leaf.is_operator())
                .count()
        } else {
            1
        };
        groups.push(&leaves[i..i + len]);
        i += len;
    }
    groups
}

fn eval_group(group: &[Leaf]) -> Ret {
    if let [single] = group {
        check_bound(single)?;
    }
    reduce(group)
}

/// `#f` at the first false group, otherwise the last group's value.
fn fold_and(leaves: &[Leaf]) -> Ret {
    let mut last = Rc::new(Sexp::truth(true));
    for group in groups(leaves) {
        let result = eval_group(group)?;
        trace!("and {:?}: {}", group, result);
        if result.is_symbol(FALSE) {
            return Ok(result);
        }
        last = result;
    }
    Ok(last)
}

/// `#t` at the first true group, otherwise the last group's value.
fn fold_or(leaves: &[Leaf]) -> Ret {
    let mut last = Rc::new(Sexp::truth(false));
    for group in groups(leaves) {
        let result = eval_group(group)?;
        trace!("or {:?}: {}", group, result);
        if result.is_symbol(TRUE) {
            return Ok(result);
        }
        last = result;
    }
    Ok(last)
}


#[cfg(test)]
#[path = "./evaluator_test.rs"]
mod evaluator_test;
