use super::{Operation, Var};
use crate::lang::ast::{Command, Expression, Ident, Statement};
use crate::lang::{Error, Value};

type Result<T> = std::result::Result<T, Error>;

/// What the caller must do after a statement has executed.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Next,
    /// `None` stops the program.
    Jump(Option<u32>),
    Print(Value),
    Input(Ident),
    Command(Command),
}

impl Expression {
    pub fn eval(&self, var: &Var) -> Result<Value> {
        use Expression::*;
        match self {
            Constant(_, val) => Ok(*val),
            Variable(col, name) => var.fetch(name).map_err(|e| e.in_column(col)),
            Binary(col, op, lhs, rhs) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                Operation::binary(*op, lhs, rhs).map_err(|e| e.in_column(col))
            }
        }
    }
}

impl Statement {
    /// Executes the statement against the variables. Anything that touches
    /// the program or the console is handed back as a `Flow`.
    pub fn execute(&self, var: &mut Var) -> Result<Flow> {
        use Statement::*;
        match self {
            Rem(_) => Ok(Flow::Next),
            Let(_, (_, name), expr) => {
                let value = expr.eval(var)?;
                var.store(name, value);
                Ok(Flow::Next)
            }
            Print(_, expr) => Ok(Flow::Print(expr.eval(var)?)),
            Input(_, (_, name)) => Ok(Flow::Input(name.clone())),
            Goto(_, target) => Ok(Flow::Jump(Some(*target))),
            If(_, lhs, comparison, rhs, target) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                if comparison.test(lhs, rhs) {
                    Ok(Flow::Jump(Some(*target)))
                } else {
                    Ok(Flow::Next)
                }
            }
            End(_) => Ok(Flow::Jump(None)),
            Command(_, command) => Ok(Flow::Command(*command)),
        }
    }
}
