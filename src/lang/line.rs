use super::lex::*;
use super::token::*;
use super::Error;

/// One decoded line of BASIC.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        Ok(Line { tokens: lex(s)? })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens that can take part in a command. Comments carry nothing
    /// executable so they are dropped here.
    pub fn into_semantic_tokens(self) -> Vec<Token> {
        self.tokens
            .into_iter()
            .filter(|t| !matches!(t, Token::Comment(_)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(Token::is_non_semantic)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lf() {
        let l = Line::new("cls\n").unwrap();
        assert_eq!(l.tokens, [Token::Word("CLS".into())]);
    }

    #[test]
    fn test_crlf() {
        let l = Line::new("files\r\n").unwrap();
        assert_eq!(l.tokens, [Token::Word("FILES".into())]);
    }

    #[test]
    fn test_empty() {
        assert!(Line::new("").unwrap().is_empty());
        assert!(Line::new("REM nothing here").unwrap().is_empty());
        assert!(Line::new("START:").unwrap().is_empty());
        assert!(!Line::new("CLS").unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        let l = Line::new("a=1+b").unwrap();
        assert_eq!(l.to_string(), "A = 1 + B");
    }
}
