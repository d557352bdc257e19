//! Step pacing

use async_trait::async_trait;
use robot_board_shared::limits;
use std::time::Duration;

/// Suspends the executor between visible steps
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait for `duration` before the next step
    async fn pause(&self, duration: Duration);
}

/// Pacer backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Delays used while running a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause after every successful step
    pub step_delay: Duration,
    /// How long the invalid-move signal is shown
    pub shake_duration: Duration,
    /// Pause between clearing the signal and resetting the board
    pub post_shake_pause: Duration,
}

impl Timing {
    /// No pauses at all
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            shake_duration: Duration::ZERO,
            post_shake_pause: Duration::ZERO,
        }
    }

    /// Animation timing with a custom step delay
    pub fn with_step_delay(step_delay: Duration) -> Self {
        Self {
            step_delay,
            ..Self::default()
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(limits::STEP_DELAY_MS),
            shake_duration: Duration::from_millis(limits::SHAKE_DURATION_MS),
            post_shake_pause: Duration::from_millis(limits::POST_SHAKE_PAUSE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.step_delay, Duration::from_millis(850));
        assert_eq!(timing.shake_duration, Duration::from_millis(500));
        assert_eq!(timing.post_shake_pause, Duration::from_millis(200));
    }

    #[test]
    fn test_custom_step_delay_keeps_shake() {
        let timing = Timing::with_step_delay(Duration::from_millis(10));
        assert_eq!(timing.step_delay, Duration::from_millis(10));
        assert_eq!(timing.shake_duration, Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_tokio_pacer_waits() {
        let start = tokio::time::Instant::now();
        TokioPacer.pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));

        TokioPacer.pause(Duration::ZERO).await;
    }
}
