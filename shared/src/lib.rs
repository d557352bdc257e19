//! Robot Board Shared Types
//!
//! This crate provides the domain types and pure rules shared by every
//! front end of the robot board: commands, headings, robot state, grid
//! limits, motion, bounded queues, the run state machine and the program
//! notation codec. Nothing in here suspends or performs I/O.

pub mod codec;
pub mod motion;
pub mod queue;
pub mod state_machine;

pub use motion::{execute_step, move_forward, turn, StepResult, Turn};
pub use queue::{CommandQueue, QueueKind};
pub use state_machine::{Controls, RunEvent, RunState, RunStateMachine, TransitionResult};

use std::fmt;

/// Fixed parameters of the board
pub mod limits {
    /// Cells per side of the square grid
    pub const GRID_SIZE: i32 = 6;

    /// Maximum number of commands on the main board
    pub const MAIN_QUEUE_CAPACITY: usize = 12;

    /// Maximum number of commands on the function board
    pub const FUNCTION_QUEUE_CAPACITY: usize = 4;

    /// Pause after every successful step
    pub const STEP_DELAY_MS: u64 = 850;

    /// How long the invalid-move signal stays raised
    pub const SHAKE_DURATION_MS: u64 = 500;

    /// Pause between clearing the invalid-move signal and the reset
    pub const POST_SHAKE_PAUSE_MS: u64 = 200;
}

/// A single block that can be placed on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Left,
    Right,
    /// Expands to the function board's commands at this position
    InvokeFunction,
}

impl Command {
    /// Short symbol used by the program notation and the terminal board
    pub fn symbol(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Left => 'L',
            Command::Right => 'R',
            Command::InvokeFunction => 'P',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Forward => write!(f, "forward"),
            Command::Left => write!(f, "left"),
            Command::Right => write!(f, "right"),
            Command::InvokeFunction => write!(f, "function"),
        }
    }
}

/// Robot heading, clockwise from up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in index order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Integer encoding: 0 = North, increasing clockwise
    pub fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Decode an integer heading, wrapping modulo 4
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }

    /// Heading after a quarter turn counter-clockwise
    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Heading after a quarter turn clockwise
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Cell offset `(dx, dy)` of one step forward; y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Rotation of the robot icon in degrees
    pub fn degrees(self) -> u16 {
        u16::from(self.index()) * 90
    }
}

/// Position and heading of the robot on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RobotState {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
}

impl RobotState {
    /// Top-left corner, facing South
    pub const INITIAL: RobotState = RobotState {
        x: 0,
        y: 0,
        dir: Direction::South,
    };

    /// Create a robot state
    pub fn new(x: i32, y: i32, dir: Direction) -> Self {
        Self { x, y, dir }
    }

    /// Whether the position lies inside the grid
    pub fn in_bounds(&self) -> bool {
        in_grid(self.x, self.y)
    }
}

impl Default for RobotState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Check whether a cell lies on the grid
pub fn in_grid(x: i32, y: i32) -> bool {
    (0..limits::GRID_SIZE).contains(&x) && (0..limits::GRID_SIZE).contains(&y)
}
