mod common;
use common::*;
use mikeos_basic::lang::ErrorCode;
use mikeos_basic::mach::{var, Palette, PalettePair};

#[test]
fn test_print() {
    let mut m = machine();
    m.load("PRINT \"HELLO\"\nPRINT \"A\" ;\nPRINT 5\nA = 65535\nPRINT A\n");
    assert_eq!(exec(&mut m), "HELLO\nA5\n65535\n");
}

#[test]
fn test_print_chr_hex() {
    let mut m = machine();
    m.enter("PRINT CHR 65");
    m.enter("PRINT HEX 255 ;");
    m.enter("PRINT HEX 10");
    assert_eq!(m.output(), "A\nFF0A\n");
}

#[test]
fn test_print_nothing() {
    let mut m = machine();
    m.enter("PRINT");
    assert_eq!(m.errors(), [ErrorCode::ArgumentError]);
}

#[test]
fn test_input() {
    let mut m = machine();
    {
        let mut screen = m.screen.borrow_mut();
        screen.inputs.push_back("hello".to_string());
        screen.inputs.push_back("42".to_string());
        screen.inputs.push_back("abc".to_string());
    }
    m.enter("INPUT $1");
    m.enter("INPUT A");
    m.enter("INPUT B");
    assert_eq!(m.string("$1"), "hello");
    assert_eq!(m.numeric('A'), 42);
    assert_eq!(m.errors(), [ErrorCode::ArgumentError]);
}

#[test]
fn test_alert() {
    let mut m = machine();
    m.enter("ALERT \"Disk full\"");
    assert_eq!(m.screen.borrow().alerts, ["Disk full"]);
}

#[test]
fn test_dialogs_use_current_palette() {
    let mut m = machine();
    let red_on_blue = PalettePair::new(Palette::Red, Palette::Blue);
    m.runtime.env().var.set_palette(var::DIALOG_OUTER, red_on_blue);
    m.runtime.env().var.set_runtime(var::LIST_DIALOG_X, 5);
    m.enter("ALERT \"Hi\"");
    m.enter("LISTBOX \"One\" \"a\" \"b\" C");
    let screen = m.screen.borrow();
    assert_eq!(screen.dialogs.len(), 2);
    assert_eq!(screen.dialogs[0].outer, red_on_blue);
    assert_eq!(screen.dialogs[1].origin.col, 5);
}

#[test]
fn test_listbox() {
    let mut m = machine();
    m.screen.borrow_mut().choices.push_back(3);
    m.enter("LISTBOX \"One,Two,Three\" \"Pick one\" \"of these\" C");
    assert_eq!(m.numeric('C'), 3);
    assert_eq!(m.screen.borrow().prompts, ["Pick one", "of these"]);
    m.enter("LISTBOX \"One,Two\" \"Pick\" \"again\" C");
    assert_eq!(m.numeric('C'), 0);
}

#[test]
fn test_cursor_position() {
    let mut m = machine();
    m.enter("MOVE 10 5");
    m.enter("CURSPOS X Y");
    assert_eq!(m.numeric('X'), 10);
    assert_eq!(m.numeric('Y'), 5);
    m.enter("PRINT \"AB\" ;");
    m.enter("CURSPOS X Y");
    assert_eq!(m.numeric('X'), 12);
}

#[test]
fn test_curschar_curscol() {
    let mut m = machine();
    m.load("INK 30\nMOVE 0 0\nPRINT \"Q\" ;\nMOVE 0 0\nCURSCHAR C\nCURSCOL D\nI = INK\n");
    exec(&mut m);
    assert_eq!(m.numeric('C'), 'Q' as u16);
    assert_eq!(m.numeric('D'), 30);
    assert_eq!(m.numeric('I'), 30);
}

#[test]
fn test_cursor_visibility() {
    let mut m = machine();
    m.enter("CURSOR OFF");
    assert!(!m.runtime.env().display.screen().cursor_visible());
    m.enter("CURSOR ON");
    assert!(m.runtime.env().display.screen().cursor_visible());
    m.enter("CURSOR BLINK");
    assert_eq!(m.errors(), [ErrorCode::ArgumentError]);
}

#[test]
fn test_cls() {
    let mut m = machine();
    m.enter("PRINT \"X\"");
    m.enter("CLS");
    let screen = m.runtime.env().display.screen();
    assert_eq!(screen.row_text(0), "");
    assert_eq!(screen.cursor().row, 0);
}
