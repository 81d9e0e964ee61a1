//! Command-line front end: process arguments and the interactive session.

pub mod args;
pub mod session;

pub use args::Cli;
pub use session::{Session, SessionEnd};
