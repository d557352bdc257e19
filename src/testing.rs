//! Recording doubles for the view and pacer

use crate::command::Pacer;
use crate::view::BoardView;
use async_trait::async_trait;
use robot_board_shared::{Command, Controls, QueueKind, RobotState};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Robot(RobotState),
    Queue(QueueKind, Vec<Command>),
    Controls(Controls),
    Bump(bool),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn robot_positions(&self) -> Vec<RobotState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Robot(state) => Some(*state),
                _ => None,
            })
            .collect()
    }
}

impl BoardView for RecordingView {
    fn robot_moved(&mut self, robot: &RobotState) {
        self.events.push(ViewEvent::Robot(*robot));
    }

    fn queue_changed(&mut self, kind: QueueKind, commands: &[Command], _capacity: usize) {
        self.events.push(ViewEvent::Queue(kind, commands.to_vec()));
    }

    fn controls_changed(&mut self, controls: Controls) {
        self.events.push(ViewEvent::Controls(controls));
    }

    fn invalid_move_signal(&mut self, active: bool) {
        self.events.push(ViewEvent::Bump(active));
    }
}

/// Records every requested pause without waiting
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}
