//! Session loop driving the executor from user actions

use super::action::{UserAction, HELP};
use crate::command::{CommandExecutor, Pacer, RunOutcome, Timing};
use crate::view::BoardView;
use anyhow::{anyhow, bail, Context, Result};
use robot_board_shared::{codec, QueueKind};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Configuration for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Step and bump pacing
    pub timing: Timing,
    /// Draw the board after every change
    pub draw_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            draw_board: true,
        }
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub runs_completed: u32,
    pub runs_aborted: u32,
    /// Actions that arrived while a run was in progress
    pub actions_rejected: u32,
}

/// Interactive session over one board
pub struct Session<V: BoardView, P: Pacer> {
    executor: CommandExecutor<V, P>,
    summary: SessionSummary,
}

impl<V: BoardView, P: Pacer> Session<V, P> {
    pub fn new(executor: CommandExecutor<V, P>) -> Self {
        Self {
            executor,
            summary: SessionSummary::default(),
        }
    }

    pub fn executor(&self) -> &CommandExecutor<V, P> {
        &self.executor
    }

    /// Process actions until `Quit` or until the sender side closes
    pub async fn run(&mut self, mut actions: mpsc::Receiver<UserAction>) -> SessionSummary {
        info!("[SESSION] Started");

        while let Some(action) = actions.recv().await {
            debug!("[SESSION] Action: {:?}", action);
            match action {
                UserAction::Quit => break,
                UserAction::Run => self.handle_run(&mut actions).await,
                other => self.handle_action(other),
            }
        }

        info!(
            "[SESSION] Ended: {} completed, {} aborted, {} actions rejected",
            self.summary.runs_completed, self.summary.runs_aborted, self.summary.actions_rejected
        );
        self.summary.clone()
    }

    fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Append(kind, command) => {
                if !self.executor.append(kind, command) {
                    println!("Cannot add {} to the {} board right now", command, kind);
                }
            }
            UserAction::Reset => {
                if !self.executor.reset() {
                    println!("Reset is not available right now");
                }
            }
            UserAction::Show => {
                let robot = self.executor.robot();
                info!(
                    "[SESSION] Robot at ({}, {}) facing {:?}, state {:?}, {} main / {} function commands",
                    robot.x,
                    robot.y,
                    robot.dir,
                    self.executor.run_state(),
                    self.executor.queue(QueueKind::Main).len(),
                    self.executor.queue(QueueKind::Function).len()
                );
                self.executor.view_mut().refresh();
            }
            UserAction::Help => println!("{}", HELP),
            UserAction::Run | UserAction::Quit => {}
        }
    }

    /// Run the board, rejecting every action that arrives meanwhile
    async fn handle_run(&mut self, actions: &mut mpsc::Receiver<UserAction>) {
        let run = self.executor.run();
        tokio::pin!(run);

        let mut rejected = 0;
        let outcome = loop {
            tokio::select! {
                biased;
                Some(action) = actions.recv() => {
                    warn!("[SESSION] Ignoring {:?} while the robot is running", action);
                    rejected += 1;
                }
                outcome = &mut run => break outcome,
            }
        };
        self.summary.actions_rejected += rejected;

        match outcome {
            RunOutcome::Completed { steps } => {
                self.summary.runs_completed += 1;
                println!("Program finished after {} steps. Type 'reset' to start over.", steps);
            }
            RunOutcome::Aborted { steps } => {
                self.summary.runs_aborted += 1;
                println!("Bump! The robot hit the wall after {} steps. Board reset.", steps);
            }
            RunOutcome::Rejected { message } => {
                println!("{}", message);
            }
        }
    }
}

/// Load both boards from program notation
pub fn load_programs<V: BoardView, P: Pacer>(
    executor: &mut CommandExecutor<V, P>,
    main: &str,
    function: &str,
) -> Result<()> {
    for (kind, text) in [(QueueKind::Main, main), (QueueKind::Function, function)] {
        let commands = codec::parse_program(kind, text)
            .with_context(|| format!("invalid {} program {:?}", kind, text))?;

        for command in commands {
            if !executor.append(kind, command) {
                bail!("{} board refused {}", kind, command);
            }
        }
    }
    Ok(())
}

/// Load both boards, run once and report the outcome
pub async fn run_once<V: BoardView, P: Pacer>(
    executor: &mut CommandExecutor<V, P>,
    main: &str,
    function: &str,
) -> Result<RunOutcome> {
    load_programs(executor, main, function)?;

    match executor.run().await {
        RunOutcome::Rejected { message } => Err(anyhow!(message)),
        outcome => Ok(outcome),
    }
}
