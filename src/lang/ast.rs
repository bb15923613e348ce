use super::{Column, Value};
use std::rc::Rc;

pub type Ident = Rc<str>;

/// One parsed program line. Each variant owns its operands outright.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Command(Column, Command),
    End(Column),
    Goto(Column, u32),
    If(Column, Expression, Comparison, Expression, u32),
    Input(Column, (Column, Ident)),
    Let(Column, (Column, Ident), Expression),
    Print(Column, Expression),
    Rem(Column),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Clear,
    Help,
    List,
    Quit,
    Run,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl Comparison {
    pub fn test(&self, lhs: Value, rhs: Value) -> bool {
        use Comparison::*;
        match self {
            Less => lhs < rhs,
            Equal => lhs == rhs,
            Greater => lhs > rhs,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Constant(Column, Value),
    Variable(Column, Ident),
    Binary(Column, BinaryOp, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}
