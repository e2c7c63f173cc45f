use std::rc::Rc;

use super::*;
use crate::error::Error;
use crate::sexp::ToSymbol;

fn fold<O: Operation>(mut op: O, operands: &[Sexp]) -> Result<Sexp, Error> {
    let mut last = op.apply(None)?;
    for operand in operands {
        last = op.apply(Some(&Rc::new(operand.clone())))?;
    }
    Ok((*op.finish(last)?).clone())
}

fn sym(s: &str) -> Sexp {
    s.to_symbol_or_panic().into()
}

fn ints(v: &[i64]) -> Sexp {
    v.iter().map(|i| Sexp::Integer(*i)).collect::<Vec<_>>().into()
}

fn dotted(a: i64, b: i64) -> Sexp {
    Sexp::cons(Some(Rc::new(Sexp::Integer(a))), Some(Rc::new(Sexp::Integer(b))))
}

#[test]
fn cons() {
    assert!(fold(MakeCons::default(), &[]).unwrap().is_nil());
    assert_eq!(
        fold(MakeCons::default(), &[Sexp::Integer(1)]).unwrap(),
        Sexp::Integer(1)
    );
    assert_eq!(
        fold(MakeCons::default(), &[Sexp::Integer(1), Sexp::Integer(2)]).unwrap(),
        dotted(1, 2)
    );
    assert_eq!(
        fold(MakeCons::default(), &[Sexp::Integer(1), ints(&[2, 3])]).unwrap(),
        ints(&[1, 2, 3])
    );
    assert_eq!(
        fold(MakeCons::default(), &[Sexp::Integer(1), Sexp::nil()]).unwrap(),
        ints(&[1])
    );
}

#[test]
fn car_cdr() {
    assert_eq!(fold(Access::car(), &[ints(&[1, 2])]).unwrap(), Sexp::Integer(1));
    assert_eq!(fold(Access::cdr(), &[ints(&[1, 2])]).unwrap(), ints(&[2]));
    assert_eq!(fold(Access::cdr(), &[dotted(1, 2)]).unwrap(), Sexp::Integer(2));
    assert!(fold(Access::cdr(), &[ints(&[1])]).unwrap().is_nil());

    // Non-pairs.
    assert_eq!(fold(Access::car(), &[sym("a")]).unwrap(), sym("a"));
    assert!(fold(Access::cdr(), &[sym("a")]).unwrap().is_nil());
    assert!(fold(Access::car(), &[Sexp::nil()]).unwrap().is_nil());
}

#[test]
fn car_cdr_without_operand() {
    let err = fold(Access::car(), &[]).unwrap_err();
    assert!(err.is_runtime());
    assert!(err.to_string().contains("MissingOperand"));
    assert!(fold(Access::cdr(), &[]).unwrap_err().is_runtime());
}

#[test]
fn list() {
    assert!(fold(MakeList::default(), &[]).unwrap().is_nil());
    let operands = vec![Sexp::Integer(1), Sexp::Integer(2), Sexp::Integer(3)];
    assert_eq!(fold(MakeList::default(), &operands).unwrap(), ints(&[1, 2, 3]));
    let nested = fold(MakeList::default(), &[ints(&[1]), Sexp::nil()]).unwrap();
    assert_eq!(nested.to_string(), "((1) ())");
}

#[test]
fn list_ref() {
    // List then index.
    let res = fold(ListRef::default(), &[ints(&[10, 20, 30]), Sexp::Integer(1)]);
    assert_eq!(res.unwrap(), Sexp::Integer(20));
    // Index last in a single list.
    let res = fold(ListRef::default(), &[ints(&[10, 20, 30, 2])]);
    assert_eq!(res.unwrap(), Sexp::Integer(30));
    // Index before list.
    let res = fold(ListRef::default(), &[Sexp::Integer(0), ints(&[10, 20])]);
    assert_eq!(res.unwrap(), Sexp::Integer(10));
}

#[test]
fn list_ref_out_of_range() {
    let err = fold(ListRef::default(), &[ints(&[1, 2, 3, 5])]).unwrap_err();
    assert!(err.is_runtime());
    assert!(err.to_string().contains("IndexOutOfRange"));

    assert!(fold(ListRef::default(), &[ints(&[1, 2, 3]), Sexp::Integer(3)]).is_err());
    assert!(fold(ListRef::default(), &[ints(&[1, 2, 3]), Sexp::Integer(-1)]).is_err());
    assert!(fold(ListRef::default(), &[Sexp::nil(), Sexp::Integer(0)]).is_err());
}

#[test]
fn list_ref_bad_operands() {
    assert!(fold(ListRef::default(), &[]).unwrap_err().is_runtime());
    assert!(fold(ListRef::default(), &[sym("a")]).unwrap_err().is_runtime());
    assert!(fold(ListRef::default(), &[ints(&[1, 2]), sym("x")]).is_err());
}

#[test]
fn list_tail() {
    let res = fold(ListTail::default(), &[ints(&[1, 2, 3]), Sexp::Integer(1)]);
    assert_eq!(res.unwrap(), ints(&[2, 3]));
    let res = fold(ListTail::default(), &[ints(&[1, 2, 3, 0])]);
    assert_eq!(res.unwrap(), ints(&[1, 2, 3]));
    let res = fold(ListTail::default(), &[ints(&[1, 2, 3]), Sexp::Integer(3)]);
    assert!(res.unwrap().is_nil());

    let improper = Sexp::cons(Some(Rc::new(Sexp::Integer(1))), Some(Rc::new(dotted(2, 3))));
    let res = fold(ListTail::default(), &[improper.clone(), Sexp::Integer(1)]);
    assert_eq!(res.unwrap(), dotted(2, 3));
    let res = fold(ListTail::default(), &[improper, Sexp::Integer(2)]);
    assert_eq!(res.unwrap(), Sexp::Integer(3));

    let err = fold(ListTail::default(), &[ints(&[1, 2, 3]), Sexp::Integer(4)]).unwrap_err();
    assert!(err.is_runtime());
}

#[test]
fn quote() {
    assert!(fold(Quote::default(), &[]).unwrap().is_nil());
    assert_eq!(fold(Quote::default(), &[sym("x")]).unwrap(), sym("x"));
}
