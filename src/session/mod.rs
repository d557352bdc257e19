//! Terminal front end for the board
//!
//! This module handles:
//! - Parsing typed actions (board buttons, run, reset)
//! - Reading actions from stdin on a background task
//! - Dispatching actions to the executor, one run at a time
//! - One-shot runs of programs given in text notation

mod action;
mod input;
mod manager;

pub use action::HELP;
pub use input::spawn_stdin_reader;
pub use manager::{run_once, Session, SessionConfig};
