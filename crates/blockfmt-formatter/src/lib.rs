//! External formatters for blockfmt.
//!
//! A formatter takes complete source text on stdin and prints the formatted
//! text on stdout. This crate knows the built-in formatters, finds their
//! executables and runs them.

pub mod discovery;
pub mod error;
pub mod formatter;
pub mod process;
pub mod spec;

pub use discovery::{find_executable, is_runnable};
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use process::{InvocationContext, ProcessFormatter};
pub use spec::{DEFAULT_UNIT_HEADER, FormatterChoice, FormatterSpec};
