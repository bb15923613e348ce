/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod exec;
mod operation;
mod program;
mod runtime;
mod var;

pub use exec::Flow;
pub use operation::Operation;
pub use program::Program;
pub use program::Step;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

#[cfg(test)]
mod tests;
