/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

Each program line is lexed on its own and must parse to exactly one statement.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;

pub mod ast;
pub mod token;

/// Any positive integer that fits; `0` is never a line.
pub type LineNumber = u32;
