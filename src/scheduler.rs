use std::time::{Duration, Instant};

use crate::game::{GameState, TickOutcome};

/// Fixed-cadence driver that decouples simulation ticks from redraws.
///
/// The host calls [`TickScheduler::poll`] as often as it likes; at most one
/// tick runs per call. Surplus time beyond one step is dropped rather than
/// caught up, so a stalled host resumes at normal speed.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    step: Duration,
    last_tick: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Offers one scheduling opportunity at `now`.
    ///
    /// The first call only anchors the clock. Returns the tick outcome when
    /// a tick ran.
    pub fn poll(&mut self, now: Instant, state: &mut GameState) -> Option<TickOutcome> {
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return None;
        };

        if !state.is_running() || now.saturating_duration_since(last_tick) < self.step {
            return None;
        }

        self.last_tick = Some(now);
        Some(state.tick())
    }

    /// Forgets the last tick so the next poll re-anchors the clock.
    pub fn restart(&mut self) {
        self.last_tick = None;
    }
}
