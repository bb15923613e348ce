use crate::error;
use crate::lang::{ast::BinaryOp, Error, Value};

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic. Results that do not fit a `Value` are an
/// `OVERFLOW` instead of wrapping.
pub struct Operation {}

impl Operation {
    pub fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
        use BinaryOp::*;
        match op {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn sum(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}
