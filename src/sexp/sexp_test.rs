use super::*;

use crate::parser;
use crate::sexp::{ConsList, SymbolError, ToSymbol};
use crate::token::Tokenizer;


fn read(s: &str) -> Sexp {
    let mut tokenizer = Tokenizer::new(s);
    parser::read(&mut tokenizer).unwrap().unwrap().into()
}

fn long_list(len: i64) -> HeapSexp {
    (0..len)
        .map(|i| -> HeapSexp { Rc::new(Sexp::Integer(i)) })
        .collect::<ConsList>()
        .release()
}

#[test]
fn vec_into_sexp() {
    let expected = read("(test ing)");
    let v = vec![
        "test".to_symbol_or_panic(),
        "ing".to_symbol_or_panic(),
    ];
    assert_eq!(<Sexp>::from(v), expected);
}

#[test]
fn list_macro() {
    let expected = read("(1 (a) ())");
    let list: Sexp = list!(1i64, list!("a".to_symbol_or_panic()), Sexp::nil()).into();
    assert_eq!(list, expected);
}

#[test]
fn non_cons() {
    let s = read("(1 2 3 . 4)");
    let mut iter = s.iter();
    assert_eq!(iter.next().unwrap(), (&Sexp::Integer(1), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::Integer(2), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::Integer(3), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::Integer(4), false));
    assert!(iter.next().is_none());
}

#[test]
fn iter_nil_and_atoms() {
    assert!(Sexp::nil().iter().next().is_none());

    let atom = Sexp::Integer(5);
    let collected = atom.iter().collect::<Vec<_>>();
    assert_eq!(collected, vec![(&Sexp::Integer(5), false)]);
}

#[test]
fn proper_lists() {
    assert!(read("(1 2 3)").is_proper_list());
    assert!(Sexp::nil().is_proper_list());
    assert!(!read("(1 2 . 3)").is_proper_list());
    assert!(!Sexp::Integer(1).is_proper_list());
}

#[test]
fn quote_forms() {
    let quoted = read("'(1 2)");
    assert!(quoted.is_quote_form());
    assert_eq!(quoted.quoted().unwrap().to_string(), "(1 2)");

    let plain = read("(1 2)");
    assert!(!plain.is_quote_form());
    assert!(plain.quoted().is_none());
    assert!(Symbol::quote().to_string() == "quote");
}

#[test]
fn heap_unwrap() {
    let shared: HeapSexp = Rc::new(Sexp::Integer(3));
    let other = shared.clone();
    assert_eq!(Sexp::from(shared), Sexp::Integer(3));
    assert_eq!(Sexp::from(other), Sexp::Integer(3));
}

#[test]
fn long_lists_drop() {
    drop(long_list(200_000));

    // Dropping one holder leaves the shared tail intact.
    let list = long_list(100_000);
    let tail = match &*list {
        Sexp::Cons(cons) => cons.cdr_heap().unwrap().clone(),
        _ => panic!(),
    };
    drop(list);
    assert_eq!(tail.iter().count(), 99_999);
}

#[test]
fn long_lists_compare() {
    let (lhs, rhs) = (long_list(100_000), long_list(100_000));
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, long_list(99_999));
    assert!(lhs.is_proper_list());
}

#[test]
fn symbol_names() {
    assert!("abc".to_symbol().is_ok());
    assert!("list-ref".to_symbol().is_ok());
    assert!("null?".to_symbol().is_ok());
    assert!("+".to_symbol().is_ok());
    assert!("<=".to_symbol().is_ok());
    assert_eq!("".to_symbol(), Err(SymbolError::Empty));
    assert!("1abc".to_symbol().is_err());
    assert!("+a".to_symbol().is_err());
    assert!("a b".to_symbol().is_err());
}
