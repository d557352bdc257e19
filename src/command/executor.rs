//! Command executor - owns the board and runs programs step by step

use super::pacer::{Pacer, Timing};
use crate::view::BoardView;
use robot_board_shared::{
    codec::format_program, execute_step, Command, CommandQueue, Controls, QueueKind, RobotState,
    RunEvent, RunState, RunStateMachine, TransitionResult,
};
use tracing::{debug, info, warn};

/// Result of running the main board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every command executed; waiting for a reset
    Completed { steps: usize },
    /// A forward step hit the boundary; the board was reset
    Aborted { steps: usize },
    /// Run control not available in the current state
    Rejected { message: String },
}

/// Owns the robot, both boards and the run lifecycle
pub struct CommandExecutor<V: BoardView, P: Pacer> {
    robot: RobotState,
    main_queue: CommandQueue,
    function_queue: CommandQueue,
    fsm: RunStateMachine,
    timing: Timing,
    view: V,
    pacer: P,
}

impl<V: BoardView, P: Pacer> CommandExecutor<V, P> {
    /// Create a new command executor and draw the initial board
    pub fn new(view: V, pacer: P, timing: Timing) -> Self {
        let mut executor = Self {
            robot: RobotState::INITIAL,
            main_queue: CommandQueue::new(QueueKind::Main),
            function_queue: CommandQueue::new(QueueKind::Function),
            fsm: RunStateMachine::new(),
            timing,
            view,
            pacer,
        };
        executor.reset();
        executor
    }

    pub fn robot(&self) -> RobotState {
        self.robot
    }

    pub fn queue(&self, kind: QueueKind) -> &CommandQueue {
        match kind {
            QueueKind::Main => &self.main_queue,
            QueueKind::Function => &self.function_queue,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.fsm.state()
    }

    pub fn controls(&self) -> Controls {
        self.fsm.controls()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn queue_mut(&mut self, kind: QueueKind) -> &mut CommandQueue {
        match kind {
            QueueKind::Main => &mut self.main_queue,
            QueueKind::Function => &mut self.function_queue,
        }
    }

    /// Append a command to a board
    ///
    /// Returns false, leaving everything unchanged, when command entry is
    /// disabled, the board is full or the board does not take this command.
    pub fn append(&mut self, kind: QueueKind, command: Command) -> bool {
        if !self.controls().commands_enabled {
            debug!(
                "[EXEC] Append {} to {} refused in state {:?}",
                command,
                kind,
                self.run_state()
            );
            return false;
        }

        if !self.queue_mut(kind).push(command) {
            debug!("[EXEC] Append {} to {} refused (full or not allowed)", command, kind);
            return false;
        }

        self.render_queue(kind);
        true
    }

    /// Run the main board
    ///
    /// Function calls are expanded inline. Execution stops at the first
    /// forward step that would leave the grid, after which the whole board
    /// is reset.
    pub async fn run(&mut self) -> RunOutcome {
        if let TransitionResult::Invalid { from, .. } = self.fsm.process_event(RunEvent::RunStarted) {
            warn!("[EXEC] Run rejected in state {:?}", from);
            return RunOutcome::Rejected {
                message: format!("Cannot run in state {:?}", from),
            };
        }
        self.publish_controls();

        // Snapshots; entry is disabled until the run ends
        let main: Vec<Command> = self.main_queue.iter().collect();
        let function: Vec<Command> = self.function_queue.iter().collect();

        info!(
            "[EXEC] Run #{} started: main={} function={}",
            self.fsm.runs_started(),
            format_program(&main),
            format_program(&function)
        );

        let mut steps = 0;
        for command in main {
            let ok = match command {
                Command::InvokeFunction => {
                    debug!("[EXEC] Calling function ({} commands)", function.len());
                    self.run_function(&function, &mut steps).await
                }
                other => self.execute_single(other, &mut steps).await,
            };

            if !ok {
                self.handle_invalid_move().await;
                info!("[EXEC] Run aborted after {} steps", steps);
                return RunOutcome::Aborted { steps };
            }
        }

        self.fsm.process_event(RunEvent::QueueExhausted);
        self.publish_controls();
        info!(
            "[EXEC] Run completed after {} steps at ({}, {}) facing {:?}",
            steps, self.robot.x, self.robot.y, self.robot.dir
        );
        RunOutcome::Completed { steps }
    }

    async fn run_function(&mut self, function: &[Command], steps: &mut usize) -> bool {
        for &command in function {
            if !self.execute_single(command, steps).await {
                return false;
            }
        }
        true
    }

    /// Execute one step and pace it; false when the step hit the boundary
    async fn execute_single(&mut self, command: Command, steps: &mut usize) -> bool {
        let result = execute_step(self.robot, command);
        if !result.ok {
            warn!(
                "[EXEC] Boundary violation: {} from ({}, {}) facing {:?}",
                command, self.robot.x, self.robot.y, self.robot.dir
            );
            return false;
        }

        self.robot = result.state;
        *steps += 1;
        debug!(
            "[EXEC] Step {}: {} -> ({}, {}) facing {:?}",
            steps, command, self.robot.x, self.robot.y, self.robot.dir
        );

        self.view.robot_moved(&self.robot);
        self.pacer.pause(self.timing.step_delay).await;
        true
    }

    /// Show the bump, then reset the whole board
    async fn handle_invalid_move(&mut self) {
        self.fsm.process_event(RunEvent::StepFailed);
        self.publish_controls();

        self.view.invalid_move_signal(true);
        self.pacer.pause(self.timing.shake_duration).await;
        self.view.invalid_move_signal(false);
        self.pacer.pause(self.timing.post_shake_pause).await;

        self.reset();
    }

    /// Clear both boards and put the robot back at the start
    ///
    /// Returns false when the reset control is not available (mid-run).
    pub fn reset(&mut self) -> bool {
        if let TransitionResult::Invalid { from, .. } = self.fsm.process_event(RunEvent::ResetRequested)
        {
            warn!("[EXEC] Reset rejected in state {:?}", from);
            return false;
        }

        self.main_queue.clear();
        self.function_queue.clear();
        self.render_queue(QueueKind::Main);
        self.render_queue(QueueKind::Function);

        self.robot = RobotState::INITIAL;
        self.view.robot_moved(&self.robot);
        self.publish_controls();

        info!("[EXEC] Board reset");
        true
    }

    fn render_queue(&mut self, kind: QueueKind) {
        let queue = match kind {
            QueueKind::Main => &self.main_queue,
            QueueKind::Function => &self.function_queue,
        };
        self.view
            .queue_changed(kind, queue.as_slice(), queue.capacity());
    }

    fn publish_controls(&mut self) {
        self.view.controls_changed(self.fsm.controls());
    }
}
