use basic::lang::{ast::*, lex, parse, Error, ErrorCode};

fn parse_str(s: &str) -> Option<Statement> {
    let (lin, tokens) = lex(s);
    parse(lin, &tokens).ok()
}

fn parse_err(s: &str) -> Error {
    let (lin, tokens) = lex(s);
    match parse(lin, &tokens) {
        Ok(s) => panic!("{:?}", s),
        Err(e) => e,
    }
}

#[test]
fn test_let() {
    let answer = Statement::Let(
        0..3,
        (4..5, "X".into()),
        Expression::Variable(8..9, "Y".into()),
    );
    assert_eq!(parse_str("LET X = Y"), Some(answer));
}

#[test]
fn test_goto() {
    assert_eq!(parse_str("10 goto 100"), Some(Statement::Goto(0..4, 100)));
}

#[test]
fn test_rem() {
    assert_eq!(parse_str("10 rem hello (world"), Some(Statement::Rem(0..3)));
}

#[test]
fn test_input() {
    let answer = Statement::Input(0..5, (6..7, "Q".into()));
    assert_eq!(parse_str("input q"), Some(answer));
}

#[test]
fn test_if() {
    let answer = Statement::If(
        0..2,
        Expression::Variable(3..4, "A".into()),
        Comparison::Equal,
        Expression::Variable(7..8, "B".into()),
        5,
    );
    assert_eq!(parse_str("10 IF A = B THEN 5"), Some(answer));
}

#[test]
fn test_syntax_errors() {
    for s in &[
        "LET = 5",
        "LET X 5",
        "PRINT (1 + 2",
        "PRINT 1 +",
        "10 THEN 5",
        "10 LET X = 5 6",
        "10 GOTO",
        "10 IF A THEN 5",
        "10 IF A = B 5",
        "10 PRINT #",
        "HELLO",
    ] {
        assert_eq!(parse_err(s).code(), ErrorCode::SyntaxError, "{}", s);
    }
}

#[test]
fn test_error_has_line_number() {
    let e = parse_err("20 LET X = (1");
    assert_eq!(e.line_number(), Some(20));
    assert!(parse_err("LET X = (1").is_direct());
}
