use super::{cp437, keyword, Var};
use crate::error;
use crate::lang::{Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// ## A token seen through the variable store
///
/// The same token can produce different values on two calls when the
/// variables or keywords it refers to change in between.

#[derive(Debug, Clone, Copy)]
pub struct Argument<'a> {
    token: &'a Token,
    var: &'a Var,
}

fn wrong_type(expected: &str, token: &Token) -> Error {
    error!(TypeMismatch; format!("Expected {} but found {:?}", expected, token.token_type()))
}

impl<'a> Argument<'a> {
    pub fn new(token: &'a Token, var: &'a Var) -> Argument<'a> {
        Argument { token, var }
    }

    pub fn token(&self) -> &'a Token {
        self.token
    }

    pub fn as_numeric(&self) -> Result<i64> {
        match self.token {
            Token::Number(n) => Ok(*n),
            Token::NumericVariable(name) => Ok(self.var.get_numeric(*name)? as i64),
            Token::StringVariableReference(s) => {
                Ok(self.var.string_variable_address(s.trim_start_matches('&'))? as i64)
            }
            Token::Char(ch) => Ok(cp437::from_char(*ch) as i64),
            Token::Word(w) if keyword::is_keyword(w) => keyword::value(w, self.var),
            Token::Word(w) => Err(error!(TypeMismatch; format!("Unknown numeric keyword: {}", w))),
            _ => Err(wrong_type("numeric", self.token)),
        }
    }

    pub fn as_string(&self) -> Result<String> {
        match self.token {
            Token::Quote(s) => {
                let inner = s.strip_prefix('"').and_then(|s| s.strip_suffix('"'));
                Ok(inner.unwrap_or(s).to_string())
            }
            Token::StringVariable(name) => self.var.get_string(name),
            _ => Err(wrong_type("string", self.token)),
        }
    }

    pub fn as_numeric_variable(&self) -> Result<char> {
        match self.token {
            Token::NumericVariable(name) => Ok(*name),
            _ => Err(wrong_type("numeric variable", self.token)),
        }
    }

    pub fn as_string_variable(&self) -> Result<&'a str> {
        match self.token {
            Token::StringVariable(name) => Ok(name),
            _ => Err(wrong_type("string variable", self.token)),
        }
    }

    pub fn as_word(&self) -> Result<String> {
        match self.token {
            Token::Word(w) => Ok(w.to_ascii_uppercase()),
            _ => Err(wrong_type("word", self.token)),
        }
    }

    pub fn as_symbol(&self) -> Result<char> {
        match self.token {
            Token::Symbol(ch) => Ok(*ch),
            _ => Err(wrong_type("symbol", self.token)),
        }
    }

    /// A label address, or a keyword value for words like `PROGSTART`.
    pub fn as_program_pointer(&self) -> Result<usize> {
        match self.token {
            Token::Label(label) => self.var.label_address(label),
            Token::Word(w) if keyword::is_keyword(w) => {
                Ok(keyword::value(w, self.var)?.max(0) as usize)
            }
            Token::Word(w) => self.var.label_address(w),
            _ => Err(wrong_type("label", self.token)),
        }
    }

    pub fn as_label_and_pointer(&self) -> Result<(String, usize)> {
        match self.token {
            Token::Word(w) if keyword::is_keyword(w) => {
                Err(error!(TypeMismatch; format!("Keyword {} is not a label", w)))
            }
            Token::Label(name) | Token::Word(name) => {
                Ok((name.clone(), self.var.label_address(name)?))
            }
            _ => Err(wrong_type("label", self.token)),
        }
    }

    pub fn is_valid_numeric(&self) -> bool {
        match self.token {
            Token::Number(_)
            | Token::NumericVariable(_)
            | Token::StringVariableReference(_)
            | Token::Char(_) => true,
            Token::Word(w) => keyword::is_keyword(w),
            _ => false,
        }
    }

    pub fn is_valid_string(&self) -> bool {
        matches!(self.token, Token::Quote(_) | Token::StringVariable(_))
    }

    pub fn is_valid_numeric_variable(&self) -> bool {
        matches!(self.token, Token::NumericVariable(_))
    }

    pub fn is_valid_string_variable(&self) -> bool {
        matches!(self.token, Token::StringVariable(_))
    }

    pub fn is_valid_word(&self) -> bool {
        matches!(self.token, Token::Word(_))
    }

    pub fn is_valid_symbol(&self) -> bool {
        matches!(self.token, Token::Symbol(_))
    }

    pub fn is_valid_program_pointer(&self) -> bool {
        self.as_program_pointer().is_ok()
    }

    pub fn is_non_semantic(&self) -> bool {
        self.token.is_non_semantic()
    }
}
