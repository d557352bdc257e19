//! Run State Machine
//!
//! Defines the lifecycle of a program run and which controls are available
//! in each state.

/// Lifecycle of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Accepting commands, ready to run
    Idle,
    /// Stepping through the main queue
    Running,
    /// Finished without hitting the boundary, waiting for a reset
    Completed,
    /// Hit the boundary, about to reset
    Aborted,
}

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// Run control pressed
    RunStarted,
    /// Every command executed without a boundary violation
    QueueExhausted,
    /// A forward step hit the boundary
    StepFailed,
    /// Reset control pressed, or automatic reset after an abort
    ResetRequested,
}

/// Result of a state transition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult {
    /// Transition was valid and state changed
    Success(RunState),
    /// Transition was invalid from current state
    Invalid { from: RunState, event: RunEvent },
}

/// Which controls a front end should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Run control and every command-entry control, as a group
    pub commands_enabled: bool,
    /// Reset control
    pub reset_enabled: bool,
}

impl Controls {
    /// Control enablement for a state
    pub fn for_state(state: RunState) -> Self {
        match state {
            RunState::Idle => Self {
                commands_enabled: true,
                reset_enabled: true,
            },
            RunState::Running | RunState::Aborted => Self {
                commands_enabled: false,
                reset_enabled: false,
            },
            RunState::Completed => Self {
                commands_enabled: false,
                reset_enabled: true,
            },
        }
    }
}

/// The run state machine
#[derive(Debug)]
pub struct RunStateMachine {
    current_state: RunState,
    runs_started: u64,
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStateMachine {
    /// Create a new state machine in Idle state
    pub fn new() -> Self {
        Self {
            current_state: RunState::Idle,
            runs_started: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> RunState {
        self.current_state
    }

    /// Controls available in the current state
    pub fn controls(&self) -> Controls {
        Controls::for_state(self.current_state)
    }

    /// Number of runs started since creation
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Process an event and return the transition result
    pub fn process_event(&mut self, event: RunEvent) -> TransitionResult {
        match self.get_next_state(event) {
            Some(state) => {
                if event == RunEvent::RunStarted {
                    self.runs_started += 1;
                }
                self.current_state = state;
                TransitionResult::Success(state)
            }
            None => TransitionResult::Invalid {
                from: self.current_state,
                event,
            },
        }
    }

    /// Get the next state for a given event, if the transition is valid
    fn get_next_state(&self, event: RunEvent) -> Option<RunState> {
        use RunEvent::*;
        use RunState::*;

        match (self.current_state, event) {
            (Idle, RunStarted) => Some(Running),
            (Idle, ResetRequested) => Some(Idle),

            (Running, QueueExhausted) => Some(Completed),
            (Running, StepFailed) => Some(Aborted),

            (Completed, ResetRequested) => Some(Idle),
            (Aborted, ResetRequested) => Some(Idle),

            _ => None,
        }
    }
}

/// Check if a transition from one state to another is valid
pub fn is_valid_transition(from: RunState, to: RunState) -> bool {
    use RunState::*;

    matches!(
        (from, to),
        (Idle, Idle)
            | (Idle, Running)
            | (Running, Completed)
            | (Running, Aborted)
            | (Completed, Idle)
            | (Aborted, Idle)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = RunStateMachine::new();
        assert_eq!(fsm.state(), RunState::Idle);
        assert_eq!(fsm.runs_started(), 0);
    }

    #[test]
    fn test_completed_run_flow() {
        let mut fsm = RunStateMachine::new();

        let result = fsm.process_event(RunEvent::RunStarted);
        assert_eq!(result, TransitionResult::Success(RunState::Running));

        let result = fsm.process_event(RunEvent::QueueExhausted);
        assert_eq!(result, TransitionResult::Success(RunState::Completed));

        // Completed waits for the user
        let result = fsm.process_event(RunEvent::RunStarted);
        assert!(matches!(result, TransitionResult::Invalid { from: RunState::Completed, .. }));

        let result = fsm.process_event(RunEvent::ResetRequested);
        assert_eq!(result, TransitionResult::Success(RunState::Idle));
        assert_eq!(fsm.runs_started(), 1);
    }

    #[test]
    fn test_aborted_run_flow() {
        let mut fsm = RunStateMachine::new();
        fsm.process_event(RunEvent::RunStarted);

        let result = fsm.process_event(RunEvent::StepFailed);
        assert_eq!(result, TransitionResult::Success(RunState::Aborted));

        let result = fsm.process_event(RunEvent::ResetRequested);
        assert_eq!(result, TransitionResult::Success(RunState::Idle));
    }

    #[test]
    fn test_reset_rejected_while_running() {
        let mut fsm = RunStateMachine::new();
        fsm.process_event(RunEvent::RunStarted);

        let result = fsm.process_event(RunEvent::ResetRequested);
        assert!(matches!(result, TransitionResult::Invalid { .. }));
        assert_eq!(fsm.state(), RunState::Running);
    }

    #[test]
    fn test_reset_from_idle_stays_idle() {
        let mut fsm = RunStateMachine::new();
        let result = fsm.process_event(RunEvent::ResetRequested);
        assert_eq!(result, TransitionResult::Success(RunState::Idle));
    }

    #[test]
    fn test_controls_per_state() {
        let idle = Controls::for_state(RunState::Idle);
        assert!(idle.commands_enabled && idle.reset_enabled);

        let running = Controls::for_state(RunState::Running);
        assert!(!running.commands_enabled && !running.reset_enabled);

        let completed = Controls::for_state(RunState::Completed);
        assert!(!completed.commands_enabled && completed.reset_enabled);

        let aborted = Controls::for_state(RunState::Aborted);
        assert!(!aborted.commands_enabled && !aborted.reset_enabled);
    }

    #[test]
    fn test_transitions_agree_with_event_table() {
        assert!(is_valid_transition(RunState::Idle, RunState::Running));
        assert!(is_valid_transition(RunState::Aborted, RunState::Idle));
        assert!(!is_valid_transition(RunState::Completed, RunState::Running));
        assert!(!is_valid_transition(RunState::Running, RunState::Idle));
        assert!(!is_valid_transition(RunState::Idle, RunState::Completed));
    }
}
