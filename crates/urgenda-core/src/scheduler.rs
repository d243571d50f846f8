//! Fixed-period recompute driver.
//!
//! Wall-clock based with no internal thread: the owner calls
//! [`RecomputeScheduler::tick`] as often as it likes and performs a full
//! recompute whenever a tick reports that a period has elapsed. Passing the
//! clock in makes time-driven behavior testable without real waits.
//!
//! The only states are running and stopped: the scheduler is armed at
//! session init and disarmed at teardown, with no persisted schedule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    Stopped,
    Running,
}

#[derive(Debug, Clone)]
pub struct RecomputeScheduler {
    period: Duration,
    state: SchedulerState,
    last_fired: Option<DateTime<Utc>>,
}

impl RecomputeScheduler {
    pub const DEFAULT_PERIOD_SECS: u64 = 10;

    pub fn new() -> Self {
        Self::with_period(Duration::seconds(Self::DEFAULT_PERIOD_SECS as i64))
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            state: SchedulerState::Stopped,
            last_fired: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the scheduler. The first fire comes one period after `now`.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.state = SchedulerState::Running;
        self.last_fired = Some(now);
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
        self.last_fired = None;
    }

    /// Report whether a period has elapsed since the last fire, re-arming
    /// for the next one when it has. Always false while stopped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        match self.last_fired {
            Some(last) if now - last >= self.period => {
                self.last_fired = Some(now);
                true
            }
            Some(_) => false,
            None => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

impl Default for RecomputeScheduler {
    fn default() -> Self {
        Self::new()
    }
}
