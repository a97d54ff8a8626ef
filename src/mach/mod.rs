/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

Statements are executed straight from the syntax tree. The runtime never
blocks: the host calls `Runtime::execute` in a loop and renders the
`Event` it returns, which keeps long or endless programs interruptible.

*/

/// Longest line accepted when loading a program from a file.
pub const MAX_LINE_LEN: usize = 255;

mod listing;
mod operation;
mod runtime;
mod val;
mod var;

pub use listing::Entry;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Phase;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Environment;

#[cfg(test)]
mod tests;
