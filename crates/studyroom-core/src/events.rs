use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every mutating timer operation produces an Event.
/// The CLI prints them; observers receive them through the session driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        from: Mode,
        to: Mode,
        at: DateTime<Utc>,
    },
    DurationAdjusted {
        remaining_minutes: u32,
        at: DateTime<Utc>,
    },
    /// Remaining time reached zero while running. The engine has already
    /// loaded the next interval and stopped itself; `start()` begins it.
    /// Counters are the post-transition values.
    IntervalCompleted {
        completed: Mode,
        next: Mode,
        sessions_completed: u32,
        total_focus_seconds: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_minutes: u32,
        remaining_seconds: u32,
        is_running: bool,
        sessions_completed: u32,
        total_focus_seconds: u64,
        elapsed_focus_seconds: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}
