use super::{token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Tokenize one line of source. A line that begins with `REM` comes back
/// as a single comment token.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    split(s)?.iter().map(|word| decode(word)).collect()
}

/// Split a line into raw words without classifying them.
pub fn split(s: &str) -> Result<Vec<String>> {
    let mut lexer = BasicLexer::default();
    for ch in s.trim().chars() {
        lexer.push(ch)?;
    }
    lexer.finish()
}

/// Classify a single raw word.
pub fn decode(raw: &str) -> Result<Token> {
    let first = match raw.chars().next() {
        Some(ch) => ch,
        None => return Err(error!(DecodingError; "Empty token")),
    };
    if first == '$' {
        string_variable(raw)
    } else if first.is_numeric() {
        number(raw)
    } else if first == '"' {
        quote(raw)
    } else if first == '\'' {
        character(raw)
    } else if first.is_alphabetic() {
        alphabetic(raw)
    } else if first == '&' {
        string_variable_reference(raw)
    } else {
        // Only the first character survives; "##" is a single '#'.
        Ok(Token::Symbol(first))
    }
}

fn is_rem(s: &str) -> bool {
    s.eq_ignore_ascii_case("REM")
}

fn string_slot(ch: char) -> bool {
    matches!(ch, '1'..='8')
}

fn string_variable(raw: &str) -> Result<Token> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() == 2 && string_slot(chars[1]) {
        return Ok(Token::StringVariable(raw.to_string()));
    }
    Err(error!(DecodingError; format!("Invalid string token: \"{}\"", raw)))
}

fn number(raw: &str) -> Result<Token> {
    match raw.parse::<i64>() {
        Ok(n) => Ok(Token::Number(n)),
        Err(_) => Err(error!(DecodingError; format!("Invalid number token: \"{}\"", raw))),
    }
}

fn quote(raw: &str) -> Result<Token> {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Ok(Token::Quote(raw.to_string()));
    }
    Err(error!(DecodingError; format!("Invalid quote token: \"{}\"", raw)))
}

fn character(raw: &str) -> Result<Token> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() == 3 && chars[0] == '\'' && chars[2] == '\'' {
        return Ok(Token::Char(chars[1]));
    }
    Err(error!(DecodingError; format!("Invalid character token: \"{}\"", raw)))
}

fn alphabetic(raw: &str) -> Result<Token> {
    let mut chars = raw.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(Token::NumericVariable(ch.to_ascii_uppercase()));
    }
    if let Some(head) = raw.get(..4) {
        if head.get(..3).map_or(false, is_rem) && head.ends_with(' ') {
            return Ok(Token::Comment(raw[4..].to_string()));
        }
    }
    if is_rem(raw) {
        return Ok(Token::Comment(String::new()));
    }
    if raw.ends_with(':') {
        return Ok(Token::Label(raw.to_string()));
    }
    if raw.chars().all(char::is_alphabetic) {
        return Ok(Token::Word(raw.to_ascii_uppercase()));
    }
    Err(error!(DecodingError; format!("Invalid word token: \"{}\"", raw)))
}

fn string_variable_reference(raw: &str) -> Result<Token> {
    let token: String = raw.chars().filter(|ch| *ch != ' ').collect();
    let chars: Vec<char> = token.chars().collect();
    if chars.len() == 3 && chars[0] == '&' && chars[1] == '$' && string_slot(chars[2]) {
        return Ok(Token::StringVariableReference(token));
    }
    Err(error!(DecodingError; format!("Invalid string reference token: \"{}\"", raw)))
}

#[derive(Default)]
struct BasicLexer {
    words: Vec<String>,
    word: String,
    in_quote: bool,
    in_char: bool,
    in_comment: bool,
    include_next: bool,
}

impl BasicLexer {
    fn push(&mut self, ch: char) -> Result<()> {
        if ch == '\r' {
            return Ok(());
        }
        if self.in_comment {
            self.word.push(ch);
            return Ok(());
        }
        if ch == '"' {
            self.word.push(ch);
            if self.in_quote {
                self.flush();
            }
            self.in_quote = !self.in_quote;
            return Ok(());
        }
        if self.in_quote {
            self.word.push(ch);
            return Ok(());
        }
        if ch == '\'' {
            self.word.push(ch);
            if self.in_char {
                self.flush();
            }
            self.in_char = !self.in_char;
            return Ok(());
        }
        if self.in_char {
            if self.word.chars().count() > 2 {
                return Err(error!(DecodingError; "Character literal too long"));
            }
            self.word.push(ch);
            return Ok(());
        }
        if self.word.is_empty() {
            match ch {
                ' ' => {}
                '&' => {
                    self.word.push(ch);
                    self.include_next = true;
                }
                _ => self.word.push(ch),
            }
            return Ok(());
        }
        if ch == ' ' {
            if self.include_next {
                return Ok(());
            }
            if self.words.is_empty() && is_rem(&self.word) {
                self.word.push(ch);
                self.in_comment = true;
            } else {
                self.flush();
            }
            return Ok(());
        }
        if ch.is_alphanumeric() || self.include_next {
            self.word.push(ch);
            self.include_next = false;
        } else if ch == ':' {
            self.word.push(ch);
            self.flush();
        } else {
            self.flush();
            self.words.push(ch.to_string());
        }
        Ok(())
    }

    fn flush(&mut self) {
        if !self.word.is_empty() {
            self.words.push(std::mem::take(&mut self.word));
        }
    }

    fn finish(mut self) -> Result<Vec<String>> {
        if self.in_quote {
            return Err(error!(DecodingError; "Unmatched quote in line"));
        }
        self.flush();
        Ok(self.words)
    }
}
