mod common;
use common::*;
use mikeos_basic::lang::ErrorCode;
use mikeos_basic::mach::{Event, State};
use std::sync::atomic::Ordering;

#[test]
fn test_peek_poke() {
    let mut m = machine();
    m.enter("POKE 65 40000");
    m.enter("PEEK A 40000");
    assert_eq!(m.numeric('A'), 65);
    m.enter("POKE 300 40000");
    m.enter("PEEK A 40000");
    assert_eq!(m.numeric('A'), 44);
}

#[test]
fn test_peekint_pokeint() {
    let mut m = machine();
    m.enter("POKEINT 1234 40000");
    m.enter("PEEKINT B 40000");
    m.enter("PEEK C 40001");
    assert_eq!(m.numeric('B'), 1234);
    assert_eq!(m.numeric('C'), 4);
}

#[test]
fn test_variables_live_in_memory() {
    let mut m = machine();
    m.enter("A = 513");
    m.enter("P = VARIABLES");
    m.enter("PEEK L P");
    assert_eq!(m.numeric('P'), 0xF000);
    assert_eq!(m.numeric('L'), 1);
}

#[test]
fn test_illegal_address() {
    let mut m = machine();
    m.enter("PEEKINT A 65535");
    m.enter("POKE 1 70000");
    assert_eq!(
        m.errors(),
        [ErrorCode::IllegalAddress, ErrorCode::IllegalAddress]
    );
}

#[test]
fn test_rand() {
    let mut m = machine();
    for _ in 0..50 {
        m.enter("RAND R 1 6");
        let r = m.numeric('R');
        assert!(r >= 1 && r <= 6, "{}", r);
    }
    m.enter("RAND R 5 5");
    assert_eq!(m.numeric('R'), 5);
    m.enter("RAND R 6 1");
    assert_eq!(m.errors(), [ErrorCode::ArgumentError]);
}

#[test]
fn test_case() {
    let mut m = machine();
    m.enter("$1 = \"Hello\"");
    m.enter("CASE UPPER $1");
    assert_eq!(m.string("$1"), "HELLO");
    m.enter("CASE LOWER $1");
    assert_eq!(m.string("$1"), "hello");
}

#[test]
fn test_len() {
    let mut m = machine();
    m.enter("$3 = \"four\"");
    m.enter("LEN $3 A");
    assert_eq!(m.numeric('A'), 4);
}

#[test]
fn test_number() {
    let mut m = machine();
    m.enter("NUMBER \"123\" A");
    assert_eq!(m.numeric('A'), 123);
    m.enter("NUMBER 77 $2");
    assert_eq!(m.string("$2"), "77");
    m.enter("NUMBER \"x\" A");
    assert_eq!(m.errors(), [ErrorCode::ArgumentError]);
}

#[test]
fn test_string() {
    let mut m = machine();
    m.enter("$1 = \"Cat\"");
    m.enter("STRING $1 0 66");
    assert_eq!(m.string("$1"), "Bat");
    m.enter("STRING $1 9 115");
    assert_eq!(m.string("$1"), "Bats");
}

#[test]
fn test_string_truncated() {
    let mut m = machine();
    let long = "x".repeat(200);
    m.enter(&format!("$1 = \"{}\"", long));
    m.enter("$2 = \"next\"");
    assert_eq!(m.string("$1").len(), 128);
    assert_eq!(m.string("$2"), "next");
}

#[test]
fn test_getkey() {
    let mut m = machine();
    m.enter("GETKEY K");
    assert_eq!(m.numeric('K'), 0);
    m.screen.borrow_mut().keys.push_back(65);
    m.enter("GETKEY K");
    assert_eq!(m.numeric('K'), 65);
}

#[test]
fn test_waitkey() {
    let mut m = machine();
    m.screen.borrow_mut().keys.push_back(13);
    m.enter("WAITKEY K");
    assert_eq!(m.numeric('K'), 13);
}

#[test]
fn test_waitkey_cancelled() {
    let mut m = machine();
    m.runtime.env().exit_flag().store(true, Ordering::SeqCst);
    assert_eq!(m.enter("WAITKEY K"), Event::Halted);
    assert_eq!(m.runtime.state(), State::Halted);
}

#[test]
fn test_serial() {
    let mut m = machine();
    m.enter("SERIAL ON 9600");
    m.enter("SERIAL SEND 65");
    m.enter("A = 7");
    m.enter("SERIAL REC A");
    let serial = &m.runtime.env().serial;
    assert!(serial.is_enabled());
    assert_eq!(serial.baud_rate(), 9600);
    assert_eq!(serial.buffer().to_vec(), vec![65u8]);
    assert_eq!(m.numeric('A'), 0);
}

#[test]
fn test_sound() {
    let mut m = machine();
    assert_eq!(m.enter("SOUND 440 0"), Event::Ready);
    assert!(m.errors().is_empty());
}

#[test]
fn test_port_unsupported() {
    let mut m = machine();
    m.enter("PORT OUT 1 2");
    assert_eq!(m.errors(), [ErrorCode::Unsupported]);
}
