use mikeos_basic::lang::{lex, ErrorCode, Line, Token};

#[test]
fn test_assignment() {
    assert_eq!(
        lex("A = 1 + 2").unwrap(),
        [
            Token::NumericVariable('A'),
            Token::Symbol('='),
            Token::Number(1),
            Token::Symbol('+'),
            Token::Number(2),
        ]
    );
}

#[test]
fn test_rem() {
    assert_eq!(
        lex("REM any text").unwrap(),
        [Token::Comment("any text".to_string())]
    );
}

#[test]
fn test_unterminated_quote() {
    let e = lex("A = \"unterminated").unwrap_err();
    assert_eq!(e.code(), ErrorCode::DecodingError);
}

#[test]
fn test_lex_is_pure() {
    let line = "IF A > 3 AND $1 = \"x\" THEN GOTO DONE";
    assert_eq!(lex(line).unwrap(), lex(line).unwrap());
}

#[test]
fn test_permissive_symbol() {
    assert_eq!(
        lex("A = 1 ## 2").unwrap(),
        [
            Token::NumericVariable('A'),
            Token::Symbol('='),
            Token::Number(1),
            Token::Symbol('#'),
            Token::Symbol('#'),
            Token::Number(2),
        ]
    );
}

#[test]
fn test_print_line() {
    assert_eq!(
        lex("PRINT \"Hello, World\" ;").unwrap(),
        [
            Token::Word("PRINT".to_string()),
            Token::Quote("\"Hello, World\"".to_string()),
            Token::Symbol(';'),
        ]
    );
}

#[test]
fn test_label_and_reference() {
    assert_eq!(
        lex("START: A = & $2").unwrap(),
        [
            Token::Label("START:".to_string()),
            Token::NumericVariable('A'),
            Token::Symbol('='),
            Token::StringVariableReference("&$2".to_string()),
        ]
    );
}

#[test]
fn test_character_literal() {
    assert_eq!(
        lex("A = 'x'").unwrap(),
        [
            Token::NumericVariable('A'),
            Token::Symbol('='),
            Token::Char('x'),
        ]
    );
}

#[test]
fn test_line_display() {
    let line = Line::new("print   a").unwrap();
    assert_eq!(line.to_string(), "PRINT A");
}
