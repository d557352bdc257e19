//! Motion rules
//!
//! Pure functions that compute the robot's next state. A forward step that
//! would leave the grid is reported through [`StepResult::ok`] and leaves the
//! state untouched; it is never an error.

use crate::{in_grid, Command, RobotState};

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// State after the step (unchanged when `ok` is false)
    pub state: RobotState,
    /// False when the step hit the grid boundary
    pub ok: bool,
}

impl StepResult {
    fn moved(state: RobotState) -> Self {
        Self { state, ok: true }
    }

    fn blocked(state: RobotState) -> Self {
        Self { state, ok: false }
    }
}

/// Step one cell in the current heading if the target cell is on the grid
pub fn move_forward(state: RobotState) -> StepResult {
    let (dx, dy) = state.dir.delta();
    let (x, y) = (state.x + dx, state.y + dy);

    if in_grid(x, y) {
        StepResult::moved(RobotState { x, y, ..state })
    } else {
        StepResult::blocked(state)
    }
}

/// Rotate the heading by a quarter turn
pub fn turn(state: RobotState, direction: Turn) -> RobotState {
    let dir = match direction {
        Turn::Left => state.dir.left(),
        Turn::Right => state.dir.right(),
    };
    RobotState { dir, ..state }
}

/// Apply one command to the robot
///
/// `InvokeFunction` is not a step on its own: callers expand it into the
/// function board's commands, so here it leaves the state as it is.
pub fn execute_step(state: RobotState, command: Command) -> StepResult {
    match command {
        Command::Forward => move_forward(state),
        Command::Left => StepResult::moved(turn(state, Turn::Left)),
        Command::Right => StepResult::moved(turn(state, Turn::Right)),
        Command::InvokeFunction => StepResult::moved(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{limits::GRID_SIZE, Direction};

    fn all_states() -> impl Iterator<Item = RobotState> {
        (0..GRID_SIZE).flat_map(|x| {
            (0..GRID_SIZE).flat_map(move |y| {
                Direction::ALL
                    .into_iter()
                    .map(move |dir| RobotState::new(x, y, dir))
            })
        })
    }

    #[test]
    fn test_forward_from_initial() {
        let result = move_forward(RobotState::INITIAL);
        assert!(result.ok);
        assert_eq!(result.state, RobotState::new(0, 1, Direction::South));
    }

    #[test]
    fn test_forward_changes_one_axis_or_blocks() {
        for state in all_states() {
            let result = move_forward(state);
            let (dx, dy) = state.dir.delta();
            let target_in_grid = in_grid(state.x + dx, state.y + dy);

            assert_eq!(result.ok, target_in_grid, "state {:?}", state);
            if result.ok {
                assert_eq!(result.state.x - state.x, dx);
                assert_eq!(result.state.y - state.y, dy);
                assert_eq!(result.state.dir, state.dir);
                assert_eq!(dx.abs() + dy.abs(), 1);
            } else {
                assert_eq!(result.state, state);
            }
        }
    }

    #[test]
    fn test_forward_blocked_at_each_edge() {
        let edge = GRID_SIZE - 1;
        assert!(!move_forward(RobotState::new(2, 0, Direction::North)).ok);
        assert!(!move_forward(RobotState::new(edge, 2, Direction::East)).ok);
        assert!(!move_forward(RobotState::new(2, edge, Direction::South)).ok);
        assert!(!move_forward(RobotState::new(0, 2, Direction::West)).ok);
    }

    #[test]
    fn test_turns_cancel_out() {
        for state in all_states() {
            assert_eq!(turn(turn(state, Turn::Left), Turn::Right), state);
            assert_eq!(turn(turn(state, Turn::Right), Turn::Left), state);
        }
    }

    #[test]
    fn test_four_turns_full_circle() {
        let mut state = RobotState::INITIAL;
        for _ in 0..4 {
            state = turn(state, Turn::Right);
        }
        assert_eq!(state, RobotState::INITIAL);
    }

    #[test]
    fn test_execute_step_dispatch() {
        let start = RobotState::INITIAL;

        let result = execute_step(start, Command::Left);
        assert!(result.ok);
        assert_eq!(result.state.dir, Direction::East);

        let result = execute_step(start, Command::Right);
        assert!(result.ok);
        assert_eq!(result.state.dir, Direction::West);

        let result = execute_step(RobotState::new(0, 0, Direction::North), Command::Forward);
        assert!(!result.ok);

        let result = execute_step(start, Command::InvokeFunction);
        assert_eq!(result.state, start);
    }
}
