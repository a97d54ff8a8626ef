//! # LINE BASIC
//!
//! A small line-numbered BASIC with an interactive terminal.
//!
//! Programs are typed one numbered line at a time and started with `RUN`.
//! The interpreter never blocks its host: `mach::Runtime::execute` runs a
//! bounded number of statements and returns an `Event` to render, so long
//! running programs stay interruptible.
//! ```text
//! LINE BASIC
//! READY.
//! █
//! ```
//!
//! Programs may also be loaded from a text file given on the command line.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
