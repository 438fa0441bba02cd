use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Size limited stack
///
/// Popping an empty stack raises the error code it was built with,
/// so `RETURN` and `LOOP` report the BASIC error directly.

pub struct Stack<T> {
    overflow_message: &'static str,
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str, underflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow_message,
            underflow,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(Error::new(ErrorCode::OutOfMemory).message(self.overflow_message))
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
}
