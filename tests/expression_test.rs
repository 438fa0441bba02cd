mod common;
use common::*;
use mikeos_basic::lang::ErrorCode;

#[test]
fn test_wraps_below_zero() {
    let m = run("A = 1\nA = A + 1\nA = A - 2\n");
    assert_eq!(m.numeric('A'), 65535);
}

#[test]
fn test_wraps_above_word() {
    let mut m = machine();
    m.enter("A = 70000");
    assert_eq!(m.numeric('A'), 4464);
}

#[test]
fn test_left_to_right() {
    let mut m = machine();
    m.enter("A = 2 + 3 * 4");
    assert_eq!(m.numeric('A'), 20);
    m.enter("B = 10 - 4 / 3 % 2");
    assert_eq!(m.numeric('B'), 0);
}

#[test]
fn test_expression_with_variables() {
    let m = run("A = 7\nB = A * A - 9\nC = B / A\n");
    assert_eq!(m.numeric('B'), 40);
    assert_eq!(m.numeric('C'), 5);
}

#[test]
fn test_division_by_zero() {
    let mut m = machine();
    m.enter("A = 1 / 0");
    assert_eq!(m.errors(), [ErrorCode::DivisionByZero]);
}

#[test]
fn test_string_building() {
    let m = run("$1 = \"foo\" + \"bar\"\n$2 = $1 + \"baz\"\n");
    assert_eq!(m.string("$1"), "foobar");
    assert_eq!(m.string("$2"), "foobarbaz");
}

#[test]
fn test_string_reference() {
    let mut m = machine();
    m.enter("A = & $1");
    assert_eq!(m.numeric('A'), 0xF100);
    m.enter("A = & $2");
    assert_eq!(m.numeric('A'), 0xF100 + 129);
}

#[test]
fn test_keywords() {
    let mut m = machine();
    m.load("A = PROGSTART\nB = VERSION\n");
    exec(&mut m);
    assert_eq!(m.numeric('A'), 0x8000);
    assert_eq!(m.numeric('B'), 18);
    m.enter("C = RAMSTART");
    assert_eq!(m.numeric('C'), 0x8000 + 26);
}

#[test]
fn test_character_value() {
    let mut m = machine();
    m.enter("A = 'A' + 1");
    assert_eq!(m.numeric('A'), 66);
}

#[test]
fn test_assignment_leftovers() {
    let mut m = machine();
    m.enter("A = 1 2");
    assert_eq!(m.errors(), [ErrorCode::SyntaxError]);
}

#[test]
fn test_type_mismatch() {
    let mut m = machine();
    m.enter("A = \"one\"");
    m.enter("$1 = 1");
    assert_eq!(m.errors(), [ErrorCode::TypeMismatch, ErrorCode::TypeMismatch]);
}
