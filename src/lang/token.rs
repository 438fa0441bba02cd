/// A classified piece of a source line. Tokens are produced once per line
/// and never mutated; what they mean is decided later by `mach::Argument`.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(String),
    Number(i64),
    Quote(String),
    Symbol(char),
    Comment(String),
    NumericVariable(char),
    StringVariable(String),
    StringVariableReference(String),
    Label(String),
    Char(char),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Word,
    Number,
    Quote,
    Symbol,
    Comment,
    NumericVariable,
    StringVariable,
    StringVariableReference,
    Label,
    Char,
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        use Token::*;
        match self {
            Word(_) => TokenType::Word,
            Number(_) => TokenType::Number,
            Quote(_) => TokenType::Quote,
            Symbol(_) => TokenType::Symbol,
            Comment(_) => TokenType::Comment,
            NumericVariable(_) => TokenType::NumericVariable,
            StringVariable(_) => TokenType::StringVariable,
            StringVariableReference(_) => TokenType::StringVariableReference,
            Label(_) => TokenType::Label,
            Char(_) => TokenType::Char,
        }
    }

    pub fn is_non_semantic(&self) -> bool {
        matches!(self, Token::Comment(_) | Token::Label(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", n),
            Quote(s) => write!(f, "{}", s),
            Symbol(c) => write!(f, "{}", c),
            Comment(s) => write!(f, "REM {}", s),
            NumericVariable(c) => write!(f, "{}", c),
            StringVariable(s) => write!(f, "{}", s),
            StringVariableReference(s) => write!(f, "{}", s),
            Label(s) => write!(f, "{}", s),
            Char(c) => write!(f, "'{}'", c),
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenType::*;
        match self {
            Word => write!(f, "word"),
            Number => write!(f, "number"),
            Quote => write!(f, "quoted string"),
            Symbol => write!(f, "symbol"),
            Comment => write!(f, "comment"),
            NumericVariable => write!(f, "numeric variable"),
            StringVariable => write!(f, "string variable"),
            StringVariableReference => write!(f, "string variable reference"),
            Label => write!(f, "label"),
            Char => write!(f, "character"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type() {
        assert_eq!(Token::Number(1).token_type(), TokenType::Number);
        assert_eq!(Token::Label("LOOP:".into()).token_type(), TokenType::Label);
    }

    #[test]
    fn test_non_semantic() {
        assert!(Token::Comment(String::new()).is_non_semantic());
        assert!(Token::Label("X:".into()).is_non_semantic());
        assert!(!Token::Word("PRINT".into()).is_non_semantic());
    }
}
