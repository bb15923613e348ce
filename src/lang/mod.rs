/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type Column = std::ops::Range<usize>;
pub type LineNumber = Option<u32>;
pub type Value = i32;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

#[cfg(test)]
mod tests;
