//! Presentation of the board
//!
//! The executor never draws anything itself. It reports every visible
//! change through [`BoardView`], so a terminal, a test harness or any other
//! front end can render the same run.

mod terminal;

pub use terminal::TerminalView;

use robot_board_shared::{Command, Controls, QueueKind, RobotState};

/// Receives visual updates from the executor
pub trait BoardView: Send {
    /// Robot moved or turned; reposition and re-orient its icon
    fn robot_moved(&mut self, robot: &RobotState);

    /// A board changed; show one block per command and clear the rest up to `capacity`
    fn queue_changed(&mut self, kind: QueueKind, commands: &[Command], capacity: usize);

    /// Control enablement changed
    fn controls_changed(&mut self, controls: Controls);

    /// Raise or clear the invalid-move ("bump") signal
    fn invalid_move_signal(&mut self, active: bool);

    /// Redraw on demand
    fn refresh(&mut self) {}
}
