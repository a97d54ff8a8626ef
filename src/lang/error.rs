use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Errors raised deep in evaluation don't know their line.
    /// The first caller that does fills it in; later calls are ignored.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    /// Detail shown after the error. Repeated calls append.
    pub fn message(self, message: &str) -> Error {
        let message = if self.message.is_empty() {
            message.to_string()
        } else {
            format!("{}; {}", self.message, message)
        };
        Error { message, ..self }
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    UndefinedLine = 8,
    IllegalDirect = 12,
    TypeMismatch = 13,
    LineBufferOverflow = 23,
    InternalError = 51,
    FileNotFound = 53,
    DirectStatementInFile = 66,
    Break = 99,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            6 => "OVERFLOW",
            8 => "UNDEFINED LINE NUMBER",
            12 => "ILLEGAL DIRECT",
            13 => "TYPE MISMATCH",
            23 => "LINE BUFFER OVERFLOW",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            66 => "DIRECT STATEMENT IN FILE",
            99 => "BREAK",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        let detail = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, detail)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, detail)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, detail)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, detail)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display_with_line() {
        assert_eq!(error!(TypeMismatch, 20).to_string(), "TYPE MISMATCH IN 20");
        assert_eq!(
            error!(SyntaxError, 10; "EXPECTED EXPRESSION").to_string(),
            "SYNTAX ERROR IN 10; EXPECTED EXPRESSION"
        );
    }

    #[test]
    fn test_direct_error() {
        let e = error!(SyntaxError);
        assert!(e.is_direct());
        assert_eq!(e.to_string(), "SYNTAX ERROR");
    }

    #[test]
    fn test_first_line_number_wins() {
        let e = error!(UndefinedLine, 30).in_line_number(40);
        assert_eq!(e.line_number(), Some(30));
    }
}
