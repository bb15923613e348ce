//! # Line BASIC
//!
//! A small line-numbered BASIC with whole number variables.
//!
//! Run the `basic` executable from a terminal and type statements.
//! Lines that begin with a number are stored as a program; anything
//! else is executed immediately.
//! ```text
//! 10 INPUT N
//! 20 PRINT N * N
//! RUN
//!  ? 12
//! 144
//! ```
//!
//! The interpreter itself performs no I/O. Feed it lines with
//! [`mach::Runtime::enter`] and drain [`mach::Event`]s from
//! [`mach::Runtime::execute`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
pub mod term;
