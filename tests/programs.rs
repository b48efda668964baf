use assign_calc::{
    run,
    scanner::tokenize,
    token::{Operator, TokenKind},
    Config,
    ErrorPolicy,
    Interpreter,
    StatementError,
};

fn bindings(program: &str) -> Result<Vec<(String, i64)>, StatementError> {
    Ok(run(program)?.bindings().to_vec())
}

fn pairs(expected: &[(&str, i64)]) -> Vec<(String, i64)> {
    expected.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

#[test]
fn precedence_and_grouping() -> Result<(), StatementError> {
    assert_eq!(bindings("x = 2+3*4;")?, pairs(&[("x", 14)]));
    assert_eq!(bindings("x = (2+3)*4;")?, pairs(&[("x", 20)]));
    assert_eq!(bindings("x = 2*(3+4)*5 - 6/(1+2);")?, pairs(&[("x", 68)]));
    Ok(())
}

#[test]
fn subtraction_is_left_associative() -> Result<(), StatementError> {
    assert_eq!(bindings("x = 10-2-3;")?, pairs(&[("x", 5)]));
    Ok(())
}

#[test]
fn division_truncates() -> Result<(), StatementError> {
    assert_eq!(bindings("x = 7/2;")?, pairs(&[("x", 3)]));
    assert_eq!(bindings("x = (0-7)/2;")?, pairs(&[("x", -3)]));
    Ok(())
}

#[test]
fn division_by_zero_fails_without_a_value() {
    let e = run("x = 1/0;").unwrap_err();
    assert!(e.source.is_evaluation());
    assert_eq!(e.text, "x = 1/0");
}

#[test]
fn undefined_variable_is_rejected() {
    let e = run("y = x + 1;").unwrap_err();
    assert!(e.source.is_evaluation());
    assert!(e.source.message().contains("Undefined variable"));
}

#[test]
fn statements_see_earlier_assignments() -> Result<(), StatementError> {
    assert_eq!(
        bindings("x = 5; y = 3 + x*2; z = x - y;")?,
        pairs(&[("x", 5), ("y", 13), ("z", -8)])
    );
    Ok(())
}

#[test]
fn reassignment_keeps_one_entry() -> Result<(), StatementError> {
    assert_eq!(bindings("x = 1; x = 2;")?, pairs(&[("x", 2)]));
    assert_eq!(bindings("b = 1; a = 2; b = b + a;")?, pairs(&[("b", 3), ("a", 2)]));
    Ok(())
}

#[test]
fn leading_zero_literal_is_lexical_error() {
    let e = run("x = 01;").unwrap_err();
    assert!(e.source.is_lexical());
}

#[test]
fn last_semicolon_is_optional() -> Result<(), StatementError> {
    assert_eq!(bindings("x = 1; y = x")?, pairs(&[("x", 1), ("y", 1)]));
    Ok(())
}

#[test]
fn empty_program_reports_nothing() -> Result<(), StatementError> {
    assert!(bindings("")?.is_empty());
    assert!(bindings(" ;\n; ")?.is_empty());
    Ok(())
}

#[test]
fn statements_may_span_lines() -> Result<(), StatementError> {
    assert_eq!(bindings("total =\n\t1 +\n\t2;\n")?, pairs(&[("total", 3)]));
    Ok(())
}

#[test]
fn runs_are_independent() -> Result<(), StatementError> {
    let interpreter = Interpreter::default();
    let program = "a = 4; b = a * a;";
    let first = interpreter.run(program)?;
    let second = interpreter.run(program)?;
    assert_eq!(first, second);
    assert!(interpreter.run("c = a;").is_err());
    Ok(())
}

#[test]
fn halting_hides_later_statements() {
    let e = run("x = 1; y = (2; z = 3;").unwrap_err();
    assert_eq!(e.number, 2);
    assert!(e.source.is_syntactic());
}

#[test]
fn continuing_reports_every_failure() -> Result<(), StatementError> {
    let interpreter = Interpreter::new(Config::new().on_error(ErrorPolicy::Continue));
    let report = interpreter.run("x = 1; y = 1/0; z = q; w = x;")?;
    assert_eq!(report.bindings(), pairs(&[("x", 1), ("w", 1)]).as_slice());
    let numbers: Vec<_> = report.skipped().iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![2, 3]);
    Ok(())
}

#[test]
fn overflow_is_reported() {
    let e = run("x = 9223372036854775807 + 1;").unwrap_err();
    assert!(e.source.is_evaluation());
}

#[test]
fn tokenizer_classifies_operators() -> assign_calc::Result<()> {
    let kinds: Vec<_> = tokenize("a=b/c")?.iter().map(|t| *t.kind()).collect();
    assert_eq!(kinds, vec![
        TokenKind::Identifier,
        TokenKind::Operator(Operator::Assign),
        TokenKind::Identifier,
        TokenKind::Operator(Operator::Slash),
        TokenKind::Identifier,
    ]);
    Ok(())
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let program = format!("x = {}1{};", "(".repeat(20_000), ")".repeat(20_000));
    let e = run(&program).unwrap_err();
    assert!(e.source.is_syntactic());
}

#[test]
fn moderate_nesting_still_evaluates() -> Result<(), StatementError> {
    let program = format!("x = {}2{} * 3;", "(".repeat(200), ")".repeat(200));
    assert_eq!(bindings(&program)?, pairs(&[("x", 6)]));
    Ok(())
}

#[test]
fn long_operator_chains_evaluate() -> Result<(), StatementError> {
    let program = format!("x = 0{};", "-1".repeat(50_000));
    assert_eq!(bindings(&program)?, pairs(&[("x", -50_000)]));
    Ok(())
}

#[test]
fn oversized_literal_is_lexical_error() {
    let e = run(&format!("x = {};", "9".repeat(500))).unwrap_err();
    assert!(e.source.is_lexical());
}

#[test]
fn non_ascii_input_is_lexical_error() {
    for program in &["x = 1\u{00A0}+ 2;", "x\u{3000}= 1;", "ünit = 1;", "x = 1 × 2;"] {
        let e = run(program).unwrap_err();
        assert!(e.source.is_lexical(), "{:?} gave {}", program, e);
    }
}
