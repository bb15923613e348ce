use super::{Flow, Var};
use crate::error;
use crate::lang::{ast::Ident, ast::Statement, Error, Value};
use std::collections::BTreeMap;
use std::ops::{Bound, RangeBounds};

type Result<T> = std::result::Result<T, Error>;

/// ## Program storage
///
/// Lines are kept in line number order. `pointer` is the line that runs
/// next; `None` when the program is stopped.

#[derive(Debug, Default)]
pub struct Program {
    lines: BTreeMap<u32, Entry>,
    pointer: Option<u32>,
}

#[derive(Debug)]
struct Entry {
    source: String,
    statement: Statement,
}

/// Result of executing one line.
#[derive(Debug, PartialEq)]
pub enum Step {
    Next,
    Print(Value),
    Input(Ident),
    Stopped,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn pointer(&self) -> Option<u32> {
        self.pointer
    }

    pub fn add_source_line(&mut self, number: u32, source: String, statement: Statement) {
        tracing::trace!(number, %source, "store line");
        self.lines.insert(number, Entry { source, statement });
    }

    pub fn remove_source_line(&mut self, number: u32) {
        if self.lines.remove(&number).is_some() {
            tracing::trace!(number, "remove line");
        }
    }

    pub fn source_line(&self, number: u32) -> Option<String> {
        self.lines.get(&number).map(|entry| entry.source.clone())
    }

    pub fn first_line_number(&self) -> Option<u32> {
        self.lines.keys().next().copied()
    }

    pub fn last_line_number(&self) -> Option<u32> {
        self.lines.keys().next_back().copied()
    }

    /// The line after `number`, which must exist.
    pub fn next_line_number(&self, number: u32) -> Result<Option<u32>> {
        if !self.lines.contains_key(&number) {
            return Err(error!(LineNumberError, Some(number)));
        }
        Ok(self.line_after(number))
    }

    fn line_after(&self, number: u32) -> Option<u32> {
        self.lines
            .range((Bound::Excluded(number), Bound::Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    pub fn list(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.list_range(..)
    }

    pub fn list_range<'a, R>(&'a self, range: R) -> impl Iterator<Item = (u32, &'a str)> + 'a
    where
        R: RangeBounds<u32> + 'a,
    {
        self.lines
            .range(range)
            .map(|(n, entry)| (*n, entry.source.as_str()))
    }

    /// `None` always succeeds. A line number only succeeds if it exists.
    pub fn set_pointer(&mut self, target: Option<u32>) -> bool {
        match target {
            None => {
                self.pointer = None;
                true
            }
            Some(number) => {
                if self.lines.contains_key(&number) {
                    self.pointer = Some(number);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn run(&mut self) {
        self.pointer = self.first_line_number();
        tracing::debug!(start = ?self.pointer, "run");
    }

    pub fn stop(&mut self) {
        self.pointer = None;
    }

    pub fn clear(&mut self, var: &mut Var) {
        self.lines.clear();
        self.pointer = None;
        var.clear();
    }

    /// Executes the line at the pointer. If the pointer still names the
    /// same line afterwards it advances to the following line, so a jump to
    /// the current line falls through.
    pub fn step(&mut self, var: &mut Var) -> Result<Step> {
        let current = match self.pointer {
            Some(current) => current,
            None => return Ok(Step::Stopped),
        };
        let flow = match self.lines.get(&current) {
            Some(entry) => entry.statement.execute(var),
            None => {
                // Removed while the program was suspended.
                self.pointer = self.line_after(current);
                tracing::debug!(line = current, next = ?self.pointer, "line removed");
                return Ok(Step::Next);
            }
        };
        let step = match flow {
            Ok(Flow::Next) => Step::Next,
            Ok(Flow::Print(val)) => Step::Print(val),
            Ok(Flow::Input(name)) => Step::Input(name),
            Ok(Flow::Jump(target)) => {
                if !self.set_pointer(target) {
                    self.stop();
                    return Err(error!(LineNumberError, Some(current)));
                }
                tracing::trace!(from = current, to = ?target, "jump");
                match target {
                    Some(_) => Step::Next,
                    None => return Ok(Step::Stopped),
                }
            }
            Ok(Flow::Command(_)) => {
                self.stop();
                return Err(error!(InternalError, Some(current); "COMMAND IN PROGRAM"));
            }
            Err(error) => {
                self.stop();
                return Err(error.in_line_number(Some(current)));
            }
        };
        if self.pointer == Some(current) {
            self.pointer = match self.next_line_number(current) {
                Ok(next) => next,
                Err(error) => {
                    self.stop();
                    return Err(error);
                }
            };
        }
        Ok(step)
    }
}
