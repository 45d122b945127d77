//! Terminal front end for the tic-tac-toe engine.
//!
//! The binary is a thin shell over these functions; they take any reader
//! and writer so whole sessions can be driven from memory.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;
mod session;

pub use cli::{Cli, Command};
pub use report::report_best_move;
pub use session::run_session;
