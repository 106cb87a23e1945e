//! REPL Module
//!
//! Command parsing, the interactive session driving the catalog client and
//! the prompt loop.

pub mod command;
pub mod runner;
pub mod session;

pub use command::{clean_input, Command, COMMANDS};
pub use runner::{run_repl, spawn_line_reader};
pub use session::{catch_succeeds, Flow, Session};
