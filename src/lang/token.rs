use super::Error;
use crate::error;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_string(s) {
            return Some(Token::Word(word));
        }
        if let Some(op) = Operator::from_string(s) {
            return Some(Token::Operator(op));
        }
        match s {
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            _ => None,
        }
    }

    /// Reads a line number out of a `Literal`.
    pub fn line_number(&self) -> Result<u32, Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(s) = self {
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<u32>() {
                    return Ok(line);
                }
                return Err(error!(Overflow; msg));
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Goto,
    Help,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl Word {
    fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "CLEAR" => Clear,
            "END" => End,
            "GOTO" => Goto,
            "HELP" => Help,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "LIST" => List,
            "PRINT" => Print,
            "QUIT" => Quit,
            "REM" => Rem,
            "RUN" => Run,
            "THEN" => Then,
            _ => return None,
        })
    }

    /// Immediate-mode commands, never stored in a program.
    pub fn is_command(&self) -> bool {
        use Word::*;
        matches!(self, Run | List | Clear | Quit | Help)
    }

    /// Statements that only make sense inside a running program.
    pub fn is_indirect_only(&self) -> bool {
        use Word::*;
        matches!(self, Rem | Goto | If | End)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            Help => write!(f, "HELP"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Quit => write!(f, "QUIT"),
            Rem => write!(f, "REM"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Less,
    Greater,
}

impl Operator {
    fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "*" => Multiply,
            "/" => Divide,
            "+" => Plus,
            "-" => Minus,
            "=" => Equal,
            "<" => Less,
            ">" => Greater,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem)));
        let t = Token::from_string("<");
        assert_eq!(t, Some(Token::Operator(Operator::Less)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_line_number() {
        assert_eq!(Token::Literal("120".to_string()).line_number(), Ok(120));
        assert_eq!(
            Token::Literal("99999999999".to_string())
                .line_number()
                .map_err(|e| e.code()),
            Err(ErrorCode::Overflow)
        );
        assert_eq!(
            Token::Ident("X".to_string())
                .line_number()
                .map_err(|e| e.code()),
            Err(ErrorCode::SyntaxError)
        );
    }
}
