//! Helpers for transforming identifiers between naming conventions, mostly for code generation.
//!
//! Mixed case input is split into words at each lowercase to uppercase boundary, so `helloWorld`
//! and `HelloWorld` both contain the words "hello" and "world". Runs of capitals (e.g. `HTTP`) are
//! not split.

mod case;
mod template;

pub use case::*;
pub use template::*;
