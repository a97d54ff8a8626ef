//! # BASIC
//!
//! Terminal front end for the line-numbered BASIC interpreter.
//!

mod term;

fn main() {
    term::main();
}
