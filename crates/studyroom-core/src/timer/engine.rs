//! Session timer engine.
//!
//! The engine is a per-second countdown state machine. It holds no clock and
//! spawns no threads - the caller invokes `tick()` once per elapsed second
//! while the engine is running (see the session driver for the scheduling
//! side and its missed-tick rule).
//!
//! ## Interval cycle
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ... -> Focus -> LongBreak -> Focus -> ...
//! ```
//!
//! Every Nth completed focus interval is followed by a long break. The
//! engine stops itself at each interval boundary; the next interval only
//! begins on an explicit `start()`, so the user acknowledges every break.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerSettings::default())?;
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::IntervalCompleted) at the boundary
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::TimerSettings;
use super::tags::TagSet;
use crate::error::ValidationError;
use crate::events::Event;

/// Interval type the countdown is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn is_focus(self) -> bool {
        self == Mode::Focus
    }

    /// Human-readable label, as shown on the mode controls.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

/// Core timer engine.
///
/// One instance per active session, mutated only through the methods below.
/// All commands return the event they produced, `None` when the call was an
/// idempotent or rejected no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    settings: TimerSettings,
    mode: Mode,
    /// Whole minutes left in the current interval.
    remaining_minutes: u32,
    /// Seconds left within the current minute, 0-59.
    remaining_seconds: u32,
    is_running: bool,
    /// Completed focus intervals. Monotonic; never reset by the engine.
    sessions_completed: u32,
    /// Cumulative seconds of completed focus intervals. Moves in
    /// whole-interval increments on completion, never per tick, so it stays
    /// exact even when ticks are delayed.
    total_focus_seconds: u64,
    /// Display-only counter: seconds ticked in focus mode since the focus
    /// interval last started fresh. Intentionally diverges from
    /// `total_focus_seconds` when the user pauses or resets mid-interval.
    elapsed_focus_seconds: u64,
    tags: TagSet,
}

impl TimerEngine {
    /// Create a new engine holding a fresh focus interval, stopped, with
    /// zero counters. Rejects invalid settings.
    pub fn new(settings: TimerSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self {
            mode: Mode::Focus,
            remaining_minutes: settings.focus_minutes,
            remaining_seconds: 0,
            is_running: false,
            sessions_completed: 0,
            total_focus_seconds: 0,
            elapsed_focus_seconds: 0,
            tags: TagSet::new(),
            settings,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Remaining time as (minutes, seconds).
    pub fn remaining(&self) -> (u32, u32) {
        (self.remaining_minutes, self.remaining_seconds)
    }

    pub fn remaining_total_seconds(&self) -> u64 {
        self.remaining_minutes as u64 * 60 + self.remaining_seconds as u64
    }

    /// Remaining time formatted "MM:SS".
    pub fn remaining_clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_minutes, self.remaining_seconds)
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn total_focus_seconds(&self) -> u64 {
        self.total_focus_seconds
    }

    pub fn elapsed_focus_seconds(&self) -> u64 {
        self.elapsed_focus_seconds
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_slice()
    }

    /// 0.0 .. 1.0 progress within the current interval, against the
    /// configured duration.
    pub fn progress(&self) -> f64 {
        let total = self.settings.duration_seconds(self.mode) as f64;
        if total == 0.0 {
            return 0.0;
        }
        ((total - self.remaining_total_seconds() as f64) / total).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_minutes: self.remaining_minutes,
            remaining_seconds: self.remaining_seconds,
            is_running: self.is_running,
            sessions_completed: self.sessions_completed,
            total_focus_seconds: self.total_focus_seconds,
            elapsed_focus_seconds: self.elapsed_focus_seconds,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or resume the countdown. Idempotent while running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_total_seconds(),
            at: Utc::now(),
        })
    }

    /// Stop the countdown without touching remaining time. Idempotent while
    /// paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_total_seconds(),
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Invoked exactly once per elapsed second while running; ticking a
    /// stopped engine is a scheduler contract violation and is ignored.
    /// Returns the completion event when this tick finishes the interval:
    /// the transition fires on the tick that reaches 0:00, the countdown
    /// never idles at zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        if self.mode.is_focus() {
            self.elapsed_focus_seconds += 1;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        } else if self.remaining_minutes > 0 {
            self.remaining_minutes -= 1;
            self.remaining_seconds = 59;
        }
        debug_assert!(self.remaining_seconds <= 59);
        if self.remaining_minutes == 0 && self.remaining_seconds == 0 {
            return Some(self.complete_interval());
        }
        None
    }

    /// Reload the current mode's configured duration and stop. Counters are
    /// untouched. Clears the session tags, and the elapsed display counter
    /// when resetting a focus interval.
    pub fn reset(&mut self) -> Option<Event> {
        self.remaining_minutes = self.settings.duration_minutes(self.mode);
        self.remaining_seconds = 0;
        self.is_running = false;
        if self.mode.is_focus() {
            self.elapsed_focus_seconds = 0;
        }
        self.tags.clear();
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Jump to `target` mode: force-stop, load its configured duration.
    /// Counters are untouched; tags and the elapsed display counter are
    /// cleared.
    pub fn switch_mode(&mut self, target: Mode) -> Option<Event> {
        let from = self.mode;
        self.mode = target;
        self.remaining_minutes = self.settings.duration_minutes(target);
        self.remaining_seconds = 0;
        self.is_running = false;
        self.elapsed_focus_seconds = 0;
        self.tags.clear();
        Some(Event::ModeSwitched {
            from,
            to: target,
            at: Utc::now(),
        })
    }

    /// Nudge the in-progress interval's remaining time by whole minutes,
    /// clamped at 1. Rejected while running. Configured settings are never
    /// touched.
    pub fn adjust_duration(&mut self, delta_minutes: i32) -> Option<Event> {
        if self.is_running {
            return None;
        }
        let adjusted = self.remaining_minutes as i64 + delta_minutes as i64;
        self.remaining_minutes = adjusted.max(1) as u32;
        self.remaining_seconds = 0;
        Some(Event::DurationAdjusted {
            remaining_minutes: self.remaining_minutes,
            at: Utc::now(),
        })
    }

    /// Replace the configured durations. Remaining time is untouched; the
    /// new durations apply when the next interval loads (completion, mode
    /// switch, or reset).
    pub fn update_settings(&mut self, settings: TimerSettings) -> Result<(), ValidationError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Attach a label to the current session. No-op on empty or duplicate
    /// input.
    pub fn add_tag(&mut self, text: &str) -> bool {
        self.tags.add(text)
    }

    /// Detach a label from the current session. No-op if absent.
    pub fn remove_tag(&mut self, text: &str) -> bool {
        self.tags.remove(text)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// The completion transition: bump counters for a finished focus
    /// interval, select the next mode, load its duration, and stop.
    fn complete_interval(&mut self) -> Event {
        let completed = self.mode;
        let next = match completed {
            Mode::Focus => {
                self.sessions_completed += 1;
                self.total_focus_seconds += self.settings.duration_seconds(Mode::Focus);
                if self.sessions_completed % self.settings.sessions_until_long_break == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => {
                // A fresh focus interval starts here.
                self.elapsed_focus_seconds = 0;
                Mode::Focus
            }
        };
        self.mode = next;
        self.remaining_minutes = self.settings.duration_minutes(next);
        self.remaining_seconds = 0;
        self.is_running = false;
        Event::IntervalCompleted {
            completed,
            next,
            sessions_completed: self.sessions_completed,
            total_focus_seconds: self.total_focus_seconds,
            at: Utc::now(),
        }
    }
}
