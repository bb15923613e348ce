use super::ast::*;
use super::*;
use pretty_assertions::assert_eq;

fn parse_str(s: &str) -> Option<Statement> {
    Line::new(s).ast().ok()
}

#[test]
fn test_rem_takes_anything() {
    assert_eq!(parse_str("10 REM 1 + + ) ?"), Some(Statement::Rem(0..3)));
    assert_eq!(parse_str("10 REM"), Some(Statement::Rem(0..3)));
}

#[test]
fn test_input() {
    assert_eq!(
        parse_str("input n"),
        Some(Statement::Input(0..5, (6..7, "N".into())))
    );
    assert_eq!(parse_str("INPUT 5"), None);
    assert_eq!(parse_str("INPUT A B"), None);
}

#[test]
fn test_goto() {
    assert_eq!(parse_str("20 GOTO 10"), Some(Statement::Goto(0..4, 10)));
    assert_eq!(parse_str("20 GOTO"), None);
}

#[test]
fn test_let_requires_target() {
    assert_eq!(parse_str("LET = 3"), None);
    assert_eq!(parse_str("LET X 3"), None);
    assert_eq!(parse_str("LET PRINT = 3"), None);
    assert_eq!(parse_str("X = 3"), None);
}

#[test]
fn test_if_needs_then() {
    assert_eq!(parse_str("10 IF 1 = 1 10"), None);
    assert_eq!(parse_str("10 IF 1 THEN 10"), None);
    assert_eq!(parse_str("10 IF 1 = 1 THEN"), None);
}

#[test]
fn test_unknown_keyword() {
    assert_eq!(parse_str("10 GOSUB 100"), None);
    assert_eq!(parse_str("10 ? 1"), None);
    assert_eq!(parse_str("FROB"), None);
}

#[test]
fn test_unbalanced_paren() {
    assert_eq!(parse_str("PRINT (1 + 2"), None);
    assert_eq!(parse_str("PRINT 1 + 2)"), None);
    assert_eq!(parse_str("PRINT"), None);
}

#[test]
fn test_commands() {
    assert_eq!(parse_str("run"), Some(Statement::Command(0..3, Command::Run)));
    assert_eq!(
        parse_str("CLEAR"),
        Some(Statement::Command(0..5, Command::Clear))
    );
    assert_eq!(parse_str("QUIT"), Some(Statement::Command(0..4, Command::Quit)));
    assert_eq!(parse_str("HELP"), Some(Statement::Command(0..4, Command::Help)));
    assert_eq!(parse_str("RUN 10"), None);
}
