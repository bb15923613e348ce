use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: &'static str,
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
            code,
            line_number: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            column: self.column.clone(),
            message: self.message,
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: column.clone(),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: self.column.clone(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UndefinedVariable,
    DivisionByZero,
    LineNumberError,
    Overflow,
    InternalError,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            SyntaxError => "SYNTAX ERROR",
            UndefinedVariable => "VARIABLE NOT DEFINED",
            DivisionByZero => "DIVISION BY ZERO",
            LineNumberError => "LINE NUMBER ERROR",
            Overflow => "OVERFLOW",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if (0..0) != self.column {
            write!(f, " ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(DivisionByZero).to_string(), "DIVISION BY ZERO");
        assert_eq!(
            error!(SyntaxError, Some(20); "EXPECTED EXPRESSION")
                .in_column(&(3..5))
                .to_string(),
            "SYNTAX ERROR IN 20 (3..5); EXPECTED EXPRESSION"
        );
        assert_eq!(
            error!(LineNumberError, Some(30)).to_string(),
            "LINE NUMBER ERROR IN 30"
        );
        assert_eq!(
            error!(SyntaxError; "ILLEGAL DIRECT")
                .in_column(&(0..4))
                .to_string(),
            "SYNTAX ERROR (0..4); ILLEGAL DIRECT"
        );
    }

    #[test]
    fn test_direct() {
        assert!(error!(UndefinedVariable).is_direct());
        assert!(!error!(UndefinedVariable, Some(10)).is_direct());
    }
}
