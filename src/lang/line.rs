use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::LineNumber;

/// A lexed line of input with its optional line number split off.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens) = lex(s);
        Line { number, tokens }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }

    /// The body of the line as it will be listed.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|s| s.to_string()).collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.source()),
            None => write!(f, "{}", self.source()),
        }
    }
}
