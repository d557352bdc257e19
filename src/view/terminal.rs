//! Text rendering of the grid and both boards

use super::BoardView;
use robot_board_shared::{limits, Command, Controls, Direction, QueueKind, RobotState};
use std::fmt::Write as _;
use std::io::Write;
use tracing::{trace, warn};

fn robot_glyph(dir: Direction) -> char {
    match dir {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

fn render_slots(out: &mut String, label: &str, commands: &[Command], capacity: usize) {
    let _ = write!(out, "{:<9}", label);
    for slot in 0..capacity {
        match commands.get(slot) {
            Some(command) => {
                let _ = write!(out, "[{}]", command.symbol());
            }
            None => out.push_str("[ ]"),
        }
    }
    out.push('\n');
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Draw the whole board as text
pub fn render_board(
    robot: &RobotState,
    main: &[Command],
    function: &[Command],
    controls: Controls,
    bumping: bool,
) -> String {
    let size = limits::GRID_SIZE;
    let border = format!("+{}+\n", "-".repeat(size as usize * 2 + 1));
    let mut out = String::new();

    out.push_str(&border);
    for y in 0..size {
        out.push('|');
        for x in 0..size {
            let cell = if robot.x == x && robot.y == y {
                if bumping {
                    '!'
                } else {
                    robot_glyph(robot.dir)
                }
            } else {
                '.'
            };
            out.push(' ');
            out.push(cell);
        }
        out.push_str(" |\n");
    }
    out.push_str(&border);

    render_slots(&mut out, "main", main, QueueKind::Main.capacity());
    render_slots(&mut out, "function", function, QueueKind::Function.capacity());

    let _ = writeln!(
        out,
        "controls: commands={} reset={}{}",
        on_off(controls.commands_enabled),
        on_off(controls.reset_enabled),
        if bumping { "  *BUMP*" } else { "" }
    );

    out
}

/// Draws the board to a terminal (or any writer) after every change
pub struct TerminalView<W: Write + Send> {
    out: W,
    draw: bool,
    robot: RobotState,
    main: Vec<Command>,
    function: Vec<Command>,
    controls: Controls,
    bumping: bool,
}

impl<W: Write + Send> TerminalView<W> {
    /// Create a view writing to `out`; with `draw` false it only tracks state
    pub fn new(out: W, draw: bool) -> Self {
        Self {
            out,
            draw,
            robot: RobotState::INITIAL,
            main: Vec::new(),
            function: Vec::new(),
            controls: Controls {
                commands_enabled: true,
                reset_enabled: true,
            },
            bumping: false,
        }
    }

    /// Current rendering
    pub fn snapshot(&self) -> String {
        render_board(
            &self.robot,
            &self.main,
            &self.function,
            self.controls,
            self.bumping,
        )
    }

    /// Consume the view and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self) {
        if !self.draw {
            return;
        }
        let frame = self.snapshot();
        let result = writeln!(self.out, "{}", frame).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("[VIEW] Failed to draw board: {}", e);
        }
    }
}

impl<W: Write + Send> BoardView for TerminalView<W> {
    fn robot_moved(&mut self, robot: &RobotState) {
        trace!("[VIEW] Robot at ({}, {}) {}deg", robot.x, robot.y, robot.dir.degrees());
        self.robot = *robot;
        self.redraw();
    }

    fn queue_changed(&mut self, kind: QueueKind, commands: &[Command], capacity: usize) {
        let commands = commands.iter().copied().take(capacity).collect();
        match kind {
            QueueKind::Main => self.main = commands,
            QueueKind::Function => self.function = commands,
        }
        self.redraw();
    }

    fn controls_changed(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn invalid_move_signal(&mut self, active: bool) {
        self.bumping = active;
        self.redraw();
    }

    fn refresh(&mut self) {
        self.redraw();
    }
}
