use super::{ast::*, token::*, Column, Error, LineNumber};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parses the tokens of one line. A `line_number` of `None` parses for
/// direct mode; otherwise for storage in the program.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens, line_number.is_some()) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token], indirect: bool) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        match parse.statement(indirect) {
            Ok(s) => Ok(s),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    fn statement(&mut self, indirect: bool) -> Result<Statement> {
        let word = match self.next() {
            Some(Token::Word(word)) => word,
            _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        if indirect && word.is_command() {
            return Err(error!(SyntaxError; "ILLEGAL IN PROGRAM"));
        }
        if !indirect && word.is_indirect_only() {
            return Err(error!(SyntaxError; "ILLEGAL DIRECT"));
        }
        let statement = Statement::for_word(self, word)?;
        match self.next() {
            None => Ok(statement),
            Some(_) => Err(error!(SyntaxError; "EXPECTED END OF LINE")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Plus)) => BinaryOp::Add,
                Some(Token::Operator(Operator::Minus)) => BinaryOp::Subtract,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = Expression::Binary(column, op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Multiply)) => BinaryOp::Multiply,
                Some(Token::Operator(Operator::Divide)) => BinaryOp::Divide,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.factor()?;
            lhs = Expression::Binary(column, op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Ident(name)) => {
                Ok(Expression::Variable(self.column(), Rc::from(name.as_str())))
            }
            Some(Token::Literal(s)) => match s.parse() {
                Ok(n) => Ok(Expression::Constant(self.column(), n)),
                Err(_) => Err(error!(Overflow; "CONSTANT TOO LARGE")),
            },
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn comparison(&mut self) -> Result<Comparison> {
        match self.next() {
            Some(Token::Operator(Operator::Less)) => Ok(Comparison::Less),
            Some(Token::Operator(Operator::Equal)) => Ok(Comparison::Equal),
            Some(Token::Operator(Operator::Greater)) => Ok(Comparison::Greater),
            _ => Err(error!(SyntaxError; "EXPECTED COMPARISON")),
        }
    }

    fn ident(&mut self) -> Result<(Column, Ident)> {
        let ident: Ident = match self.next() {
            Some(Token::Ident(i)) => Rc::from(i.as_str()),
            _ => return Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        };
        Ok((self.column(), ident))
    }

    fn line_number(&mut self) -> Result<u32> {
        match self.next() {
            Some(token) => token.line_number(),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Clear => Ok(Statement::Command(column, Command::Clear)),
            End => Ok(Statement::End(column)),
            Goto => Self::r#goto(parse, column),
            Help => Ok(Statement::Command(column, Command::Help)),
            If => Self::r#if(parse, column),
            Input => Self::r#input(parse, column),
            Let => Self::r#let(parse, column),
            List => Ok(Statement::Command(column, Command::List)),
            Print => Self::r#print(parse, column),
            Quit => Ok(Statement::Command(column, Command::Quit)),
            Rem => Self::r#rem(parse, column),
            Run => Ok(Statement::Command(column, Command::Run)),
            Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        while parse.next().is_some() {}
        Ok(Statement::Rem(column))
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, ident, expr))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Print(column, parse.expression()?))
    }

    fn r#input(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Input(column, parse.ident()?))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let lhs = parse.expression()?;
        let comparison = parse.comparison()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(column, lhs, comparison, rhs, target))
    }
}
