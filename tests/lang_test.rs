mod common;

use minischeme::error::ErrorCategory::{Runtime, Syntax};
use minischeme::Interpreter;


#[test]
fn integer_literals() {
    let interpreter = common::setup();

    for n in &[0i64, 7, -7, 42, 1234567890, i64::MAX, i64::MIN] {
        assert_eq!(common::result(&interpreter, n.to_string()), n.to_string());
    }
    assert_eq!(common::result(&interpreter, "+5"), "5");
}

#[test]
fn basic_arithmetic() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(+ 1 2 3)", "(* 2 3 4)", "(- 10 3 2)", "(/ 7 2)", "(max 1 5 3)", "(min 4 -2)"],
    );
    assert_eq!(results, vec!["6", "24", "5", "3", "5", "-2"]);
}

#[test]
fn nested_arithmetic() {
    let interpreter = common::setup();

    assert_eq!(common::result(&interpreter, "(+ 1 (* 2 3))"), "7");
    assert_eq!(common::result(&interpreter, "(* 2 (+ 1 2 3))"), "12");
    assert_eq!(common::result(&interpreter, "(abs (- 3 10))"), "7");
}

#[test]
fn arithmetic_errors() {
    let interpreter = common::setup();

    assert_eq!(common::error_category(&interpreter, "(- 5)"), Runtime);
    assert_eq!(common::error_category(&interpreter, "(/ 5)"), Runtime);
    assert_eq!(common::error_category(&interpreter, "(/ 5 0)"), Runtime);
    assert_eq!(
        common::error_category(&interpreter, "(+ 9223372036854775807 1)"),
        Runtime
    );
    assert_eq!(common::error_category(&interpreter, "(+ 1 a)"), Runtime);
    assert_eq!(common::error_category(&interpreter, "(+ 1 '(2))"), Runtime);
}

#[test]
fn comparisons() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(< 1 2 3)", "(< 1 3 2)", "(= 2 2 2)", "(>= 3 3 1)", "(> 1)", "(<= 1 2 2)"],
    );
    assert_eq!(results, vec!["#t", "#f", "#t", "#t", "#t", "#t"]);
}

#[test]
fn predicates() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(number? 1 2)",
            "(number? 1 #t)",
            "(boolean? #f)",
            "(boolean? 0)",
            "(not #f)",
            "(not 3)",
            "(null? '())",
            "(null? '(1))",
            "(list? '(1 2))",
            "(list? '(1 . 2))",
            "(pair? '(1 . 2))",
            "(pair? '())",
        ],
    );
    assert_eq!(
        results,
        vec!["#t", "#f", "#t", "#f", "#t", "#f", "#t", "#f", "#t", "#f", "#t", "#f"]
    );
}

#[test]
fn boolean_forms() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(and)",
            "(or)",
            "(and 1 2)",
            "(and #t #f)",
            "(or #f 5)",
            "(or 1 #f)",
            "(or #t 5)",
            "(or (< 2 1) (< 1 2))",
        ],
    );
    assert_eq!(results, vec!["#t", "#f", "2", "#f", "5", "#f", "#t", "#t"]);
}

#[test]
fn pairs_and_lists() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(cons 1 2)",
            "(cons 1 '(2 3))",
            "(list 1 2 3)",
            "(list)",
            "(car (quote (1 2)))",
            "(cdr '(1 2))",
            "(cdr '(1 . 2))",
            "(car (list 4 5))",
        ],
    );
    assert_eq!(
        results,
        vec!["(1 . 2)", "(1 2 3)", "(1 2 3)", "()", "1", "(2)", "2", "4"]
    );
}

#[test]
fn list_access() {
    let interpreter = common::setup();

    assert_eq!(common::result(&interpreter, "(list-ref (list 1 2 3) 1)"), "2");
    assert_eq!(common::result(&interpreter, "(list-ref '(a b c) 2)"), "c");
    assert_eq!(common::result(&interpreter, "(list-tail '(1 2 3) 1)"), "(2 3)");
    assert_eq!(common::result(&interpreter, "(list-tail '(1 2 3) 3)"), "()");

    assert_eq!(
        common::error_category(&interpreter, "(list-ref (list 1 2 3) 5)"),
        Runtime
    );
    assert_eq!(
        common::error_category(&interpreter, "(list-tail '(1 2) 3)"),
        Runtime
    );
    assert_eq!(common::error_category(&interpreter, "(car)"), Runtime);
}

#[test]
fn quoting() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "'(1 2 3)",
            "(quote (1 2 3))",
            "'(1 . 2)",
            "'(a (b c) . d)",
            "'()",
            "'x",
            "''x",
        ],
    );
    assert_eq!(
        results,
        vec!["(1 2 3)", "(1 2 3)", "(1 . 2)", "(a (b c) . d)", "()", "x", "(quote x)"]
    );
}

#[test]
fn quote_round_trip() {
    let interpreter = common::setup();

    for text in &["(1 2 3)", "((1) (2 (3)))", "(x . y)", "(#t #f)"] {
        let quoted = format!("'{}", text);
        assert_eq!(common::result(&interpreter, &quoted), *text);
        // Printing is stable.
        let again = format!("'{}", common::result(&interpreter, &quoted));
        assert_eq!(common::result(&interpreter, &again), *text);
    }
}

#[test]
fn syntax_errors() {
    let interpreter = common::setup();

    for input in &["(+ 1 2", ")", "(1 . )", "(. 1)", "'", "(+ 1 @)", "(quote)", "(1 2))"] {
        assert_eq!(common::error_category(&interpreter, input), Syntax, "{}", input);
    }
}

#[test]
fn runtime_errors() {
    let interpreter = common::setup();

    for input in &["", "foo", "(1 2 3)", "()", "(abs 1 2)", "(max)", "(not #t #f)"] {
        assert_eq!(common::error_category(&interpreter, input), Runtime, "{:?}", input);
    }
}

#[test]
fn trailing_input() {
    let interpreter = common::setup();

    assert_eq!(common::result(&interpreter, "(+ 1 2) (+ 3 4)"), "3");
    assert_eq!(common::result(&interpreter, "\n  7 8\n"), "7");
    assert_eq!(common::error_category(&interpreter, "1 (2"), Syntax);
}

#[test]
fn depth_limit() {
    let shallow = Interpreter::with_max_depth(2);
    assert_eq!(common::result(&shallow, "(+ 1 (+ 2 3))"), "6");
    assert_eq!(common::error_category(&shallow, "(+ 1 (+ 2 (+ 3)))"), Syntax);

    let deep = format!("{}1", "'".repeat(200));
    assert_eq!(common::error_category(&common::setup(), &deep), Syntax);
    assert_eq!(
        common::result(&Interpreter::with_max_depth(256), &deep),
        format!("{}1{}", "(quote ".repeat(199), ")".repeat(199))
    );
}

#[test]
fn errors_are_reified() {
    let interpreter = common::setup();

    let err = common::error(&interpreter, "(list-ref '(1 2) 7)");
    assert!(err.is_runtime());
    assert_eq!(
        err.kind().reify().to_string(),
        "(EvalErr IndexOutOfRange (index 7) (len 2))"
    );

    let err = common::error(&interpreter, "(1 . 2 3)");
    assert!(err.is_syntax());
    assert!(err.to_string().starts_with("[Syntax Error] (ParseError NotPenultimatePeriod"));
}

#[test]
fn symbol_check() {
    let interpreter = common::setup();

    for input in &["(+ 1 x)", "(list 1 #t)", "(cons #t #f)", "(* 2 (+ 1 y))"] {
        let err = common::error(&interpreter, input);
        assert!(err.is_runtime(), "{}", input);
        assert!(err.to_string().contains("UnboundSymbol"), "{}", input);
    }
    // Predicates and quotes lift the check.
    assert_eq!(common::result(&interpreter, "(null? x)"), "#f");
    assert_eq!(common::result(&interpreter, "(list 1 'x)"), "(1 x)");
    assert_eq!(common::result(&interpreter, "(not #t)"), "#f");
}

#[test]
fn missing_operands() {
    let interpreter = common::setup();

    // Arity validation catches a bare car/cdr before reduction.
    for input in &["(car)", "(cdr)"] {
        let err = common::error(&interpreter, input);
        assert!(err.is_runtime(), "{}", input);
        assert!(err.to_string().contains("WrongArgumentCount"), "{}", input);
    }
    assert_eq!(common::result(&interpreter, "(car (list))"), "()");
}

#[test]
fn list_index_errors() {
    let interpreter = common::setup();

    assert_eq!(
        common::error(&interpreter, "(list-tail '(1 2) 3)").kind().reify().to_string(),
        "(EvalErr IndexOutOfRange (index 3) (len 2))"
    );
    assert_eq!(
        common::error(&interpreter, "(list-ref (list 1 2 -1))").kind().reify().to_string(),
        "(EvalErr IndexOutOfRange (index -1) (len 2))"
    );
    assert_eq!(common::result(&interpreter, "(list-tail (list 1 2 2))"), "()");
}

#[test]
fn pair_predicate() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(pair? 1)", "(pair? '(1))", "(pair? '(1 . 2))", "(pair? '())", "(pair? 'a)"],
    );
    assert_eq!(results, vec!["#f", "#t", "#t", "#f", "#f"]);
}

#[test]
fn long_forms() {
    let interpreter = common::setup();

    let sum = format!("(+{})", " 1".repeat(100_000));
    assert_eq!(common::result(&interpreter, &sum), "100000");

    let quoted = format!("'({})", "7 ".repeat(100_000));
    let text = common::result(&interpreter, &quoted);
    assert_eq!(text.len(), 2 * 100_000 + 1);

    let list = format!("(list{})", " 2".repeat(100_000));
    assert!(common::result(&interpreter, &list).starts_with("(2 2 2"));
}

#[test]
fn free_function() {
    assert_eq!(minischeme::run("(+ 40 2)").unwrap(), "42");
    assert!(minischeme::run("(").unwrap_err().is_syntax());
}
