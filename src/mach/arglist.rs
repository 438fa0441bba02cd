use super::{Argument, Var};
use crate::error;
use crate::lang::{Error, Token};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Forward cursor over the arguments of one command
///
/// `get_*` consumes one argument or fails. `has_*` only looks, except
/// `has_specific_symbol` and `has_specific_word` which step past the
/// argument when it matches. Loops such as `while args.has_specific_word("AND")`
/// depend on that.

#[derive(Debug, Clone)]
pub struct ArgumentList {
    tokens: Vec<Token>,
    index: usize,
    var: Rc<Var>,
}

impl ArgumentList {
    pub fn new(tokens: Vec<Token>, var: Rc<Var>) -> ArgumentList {
        ArgumentList {
            tokens,
            index: 0,
            var,
        }
    }

    pub fn var(&self) -> &Rc<Var> {
        &self.var
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    fn current(&self) -> Option<Argument> {
        self.tokens.get(self.index).map(|t| Argument::new(t, &self.var))
    }

    fn take(&mut self) -> Result<Argument> {
        if self.index >= self.tokens.len() {
            return Err(error!(ArgumentError; "Not enough arguments"));
        }
        self.index += 1;
        Ok(Argument::new(&self.tokens[self.index - 1], &self.var))
    }

    pub fn syntax_error(&self, message: &str) -> Error {
        error!(ArgumentError; message)
    }

    pub fn expect_more_arguments(&self, count: usize) -> Result<()> {
        if self.index + count > self.tokens.len() {
            Err(error!(ArgumentError; "Not enough arguments"))
        } else {
            Ok(())
        }
    }

    /// Skip one argument.
    pub fn next(&mut self) {
        self.index += 1;
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn get_token(&mut self) -> Result<Token> {
        Ok(self.take()?.token().clone())
    }

    pub fn get_numeric(&mut self) -> Result<i64> {
        self.take()?.as_numeric()
    }

    pub fn get_string(&mut self) -> Result<String> {
        self.take()?.as_string()
    }

    pub fn get_numeric_variable(&mut self) -> Result<char> {
        self.take()?.as_numeric_variable()
    }

    pub fn get_string_variable(&mut self) -> Result<String> {
        Ok(self.take()?.as_string_variable()?.to_string())
    }

    pub fn set_numeric_variable(&mut self, value: i64) -> Result<()> {
        let name = self.get_numeric_variable()?;
        self.var.set_numeric(name, value)
    }

    pub fn set_string_variable(&mut self, value: &str) -> Result<()> {
        let name = self.get_string_variable()?;
        self.var.set_string(&name, value)
    }

    pub fn get_word(&mut self) -> Result<String> {
        self.take()?.as_word()
    }

    pub fn get_symbol(&mut self) -> Result<char> {
        self.take()?.as_symbol()
    }

    pub fn get_program_pointer(&mut self) -> Result<usize> {
        self.take()?.as_program_pointer()
    }

    pub fn get_label_and_pointer(&mut self) -> Result<(String, usize)> {
        self.take()?.as_label_and_pointer()
    }

    pub fn get_specific_symbol(&mut self, symbol: char) -> Result<()> {
        let actual = self.get_symbol()?;
        if actual != symbol {
            return Err(error!(ArgumentError; format!("Expected \"{}\" but got \"{}\"", symbol, actual)));
        }
        Ok(())
    }

    pub fn get_symbol_from_list(&mut self, symbols: &[char]) -> Result<char> {
        let actual = self.get_symbol()?;
        if !symbols.contains(&actual) {
            return Err(error!(ArgumentError; format!("Expected one of {:?} but got \"{}\"", symbols, actual)));
        }
        Ok(actual)
    }

    pub fn get_specific_word(&mut self, word: &str) -> Result<()> {
        let actual = self.get_word()?;
        if actual != word {
            return Err(error!(ArgumentError; format!("Expected \"{}\" but got \"{}\"", word, actual)));
        }
        Ok(())
    }

    pub fn get_word_from_list(&mut self, words: &[&str]) -> Result<String> {
        let actual = self.get_word()?;
        if !words.contains(&actual.as_str()) {
            return Err(error!(ArgumentError; format!("Expected one of {:?} but got \"{}\"", words, actual)));
        }
        Ok(actual)
    }

    pub fn has_any(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn has_numeric(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_numeric())
    }

    pub fn has_string(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_string())
    }

    pub fn has_numeric_variable(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_numeric_variable())
    }

    pub fn has_string_variable(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_string_variable())
    }

    pub fn has_word(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_word())
    }

    pub fn has_symbol(&self) -> bool {
        self.current().map_or(false, |a| a.is_valid_symbol())
    }

    pub fn has_non_semantic(&self) -> bool {
        self.current().map_or(false, |a| a.is_non_semantic())
    }

    /// Consumes the symbol when it matches.
    pub fn has_specific_symbol(&mut self, symbol: char) -> bool {
        let found = matches!(self.current().map(|a| a.as_symbol()), Some(Ok(s)) if s == symbol);
        if found {
            self.index += 1;
        }
        found
    }

    /// Consumes the word when it matches.
    pub fn has_specific_word(&mut self, word: &str) -> bool {
        let found = matches!(self.current().map(|a| a.as_word()), Some(Ok(w)) if w == word);
        if found {
            self.index += 1;
        }
        found
    }

    /// `numeric (= | > | < | !) numeric`, where `!` is not-equal.
    pub fn evaluate_condition(&mut self) -> Result<bool> {
        let lhs = self.get_numeric()?;
        let op = self.get_symbol_from_list(&['=', '>', '<', '!'])?;
        let rhs = self.get_numeric()?;
        Ok(match op {
            '=' => lhs == rhs,
            '>' => lhs > rhs,
            '<' => lhs < rhs,
            _ => lhs != rhs,
        })
    }

    /// Folds strictly left to right. There is no precedence.
    pub fn evaluate_numeric_expression(&mut self) -> Result<i64> {
        let mut result = self.get_numeric()?;
        while self.has_symbol() {
            let op = self.get_symbol_from_list(&['+', '-', '*', '/', '%'])?;
            let value = self.get_numeric()?;
            result = match op {
                '+' => result.wrapping_add(value),
                '-' => result.wrapping_sub(value),
                '*' => result.wrapping_mul(value),
                _ if value == 0 => return Err(error!(DivisionByZero)),
                '/' => floor_div(result, value),
                _ => result.wrapping_sub(value.wrapping_mul(floor_div(result, value))),
            };
        }
        Ok(result)
    }

    pub fn evaluate_string_expression(&mut self) -> Result<String> {
        let mut result = self.get_string()?;
        while self.has_symbol() {
            self.get_specific_symbol('+')?;
            result.push_str(&self.get_string()?);
        }
        Ok(result)
    }

    /// A new list over what has not been consumed yet.
    pub fn slice_remaining(&self) -> ArgumentList {
        let start = self.index.min(self.tokens.len());
        ArgumentList::new(self.tokens[start..].to_vec(), Rc::clone(&self.var))
    }
}

/// Rounds toward negative infinity, so `-7 / 2` is `-4`.
fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let q = lhs.wrapping_div(rhs);
    if lhs.wrapping_rem(rhs) != 0 && (lhs < 0) != (rhs < 0) {
        q - 1
    } else {
        q
    }
}

impl std::fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
