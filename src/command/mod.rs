//! Command execution for the robot board
//!
//! This module handles:
//! - Accepting commands onto the main and function boards
//! - Running the main board step by step, expanding function calls
//! - Pacing every visible step
//! - Recovering from boundary violations with a full reset

mod executor;
mod pacer;

pub use executor::{CommandExecutor, RunOutcome};
pub use pacer::{Pacer, Timing, TokioPacer};
