mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("PRINT 3 + 4 * 2");
    assert_eq!(exec(&mut r), "11\n");
    r.enter("PRINT (3 + 4) * 2");
    assert_eq!(exec(&mut r), "14\n");
    r.enter("PRINT 2 * 3 + 4 * 5");
    assert_eq!(exec(&mut r), "26\n");
}

#[test]
fn test_left_associative() {
    let mut r = Runtime::default();
    r.enter("PRINT 10 - 2 - 3");
    assert_eq!(exec(&mut r), "5\n");
    r.enter("PRINT 64 / 4 / 2");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_division_truncates_toward_zero() {
    let mut r = Runtime::default();
    r.enter("PRINT 7 / 2");
    assert_eq!(exec(&mut r), "3\n");
    r.enter("PRINT (0 - 7) / 2");
    assert_eq!(exec(&mut r), "-3\n");
}

#[test]
fn test_variables_are_case_insensitive() {
    let mut r = Runtime::default();
    r.enter("let count = 5");
    r.enter("print Count * COUNT");
    assert_eq!(exec(&mut r), "25\n");
}

#[test]
fn test_nested_parens() {
    let mut r = Runtime::default();
    r.enter("PRINT ((((2))) * (1 + (3 - 1)))");
    assert_eq!(exec(&mut r), "6\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.enter("PRINT 1 / 0");
    assert_eq!(exec(&mut r), "DIVISION BY ZERO (8..9)\n");
}

#[test]
fn test_undefined_variable() {
    let mut r = Runtime::default();
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "VARIABLE NOT DEFINED (6..7)\n");
    r.enter("LET X = 0");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_overflow() {
    let mut r = Runtime::default();
    r.enter("PRINT 2147483647 + 1");
    assert_eq!(exec(&mut r), "OVERFLOW (17..18)\n");
    r.enter("PRINT 2147483647");
    assert_eq!(exec(&mut r), "2147483647\n");
}
