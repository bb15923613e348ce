use crate::error;
use crate::lang::{ast::Ident, Error, Value};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Writes create variables. Reading a name that was never written is an
/// error rather than an implicit zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Ident, Value>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Value> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn store(&mut self, var_name: &Ident, value: Value) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}
