pub struct Error {
    code: ErrorCode,
    address: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(&$msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .message(&$msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<usize> {
        self.address
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Cancellation is the only error that must unwind the interpreter
    /// thread instead of being reported and skipped.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::Cancelled
    }

    pub fn is_end_of_program(&self) -> bool {
        self.code == ErrorCode::EndOfProgram
    }

    pub fn in_address(self, address: usize) -> Error {
        if self.address.is_some() {
            return self;
        }
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    LoopWithoutDo = 4,
    IllegalAddress = 5,
    OutOfMemory = 7,
    UndefinedLabel = 8,
    InvalidVariable = 9,
    UndefinedVariable = 10,
    DivisionByZero = 11,
    DecodingError = 12,
    TypeMismatch = 13,
    ArgumentError = 22,
    NotFound = 40,
    InternalError = 51,
    FileNotFound = 53,
    Unsupported = 70,
    EndOfProgram = 80,
    Cancelled = 81,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            LoopWithoutDo => "LOOP WITHOUT DO",
            IllegalAddress => "ILLEGAL ADDRESS",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLabel => "UNDEFINED LABEL",
            InvalidVariable => "INVALID VARIABLE",
            UndefinedVariable => "UNDEFINED VARIABLE",
            DivisionByZero => "DIVISION BY ZERO",
            DecodingError => "DECODING ERROR",
            TypeMismatch => "TYPE MISMATCH",
            ArgumentError => "ARGUMENT ERROR",
            NotFound => "NOT FOUND",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            Unsupported => "UNSUPPORTED COMMAND",
            EndOfProgram => "END OF PROGRAM",
            Cancelled => "CANCELLED",
        }
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        Error {
            code: self.code,
            address: self.address,
            message: self.message.clone(),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        self.code == other.code
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {:04X}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.as_str(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(SyntaxError);
        assert_eq!(e.to_string(), "SYNTAX ERROR");
        let e = error!(UndefinedLabel, 0x8004; "Invalid label: LOOP");
        assert_eq!(e.to_string(), "UNDEFINED LABEL AT 8004; Invalid label: LOOP");
    }

    #[test]
    fn test_address_is_kept_once() {
        let e = error!(TypeMismatch, 0x10).in_address(0x20);
        assert_eq!(e.address(), Some(0x10));
    }

    #[test]
    fn test_only_cancellation_is_fatal() {
        assert!(error!(Cancelled).is_fatal());
        assert!(!error!(SyntaxError).is_fatal());
        assert!(error!(EndOfProgram).is_end_of_program());
    }
}
