//! Session driver.
//!
//! Bridges the clockless engine to wall time: one `tick()` per elapsed
//! second while the engine is running, with every resulting event forwarded
//! to an observer. This is the subscription surface for UIs and for
//! side-effecting collaborators (sound, notifications), which stay outside
//! the engine.
//!
//! ## Missed ticks
//!
//! When the host is delayed or backgrounded, missed ticks are SKIPPED, never
//! replayed (`MissedTickBehavior::Skip`): at most one decrement is applied
//! per interval firing, so the countdown stretches rather than jumps. Ticks
//! are applied sequentially from this single loop; there is never more than
//! one in flight.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use super::engine::TimerEngine;
use crate::events::Event;

/// Receives engine output while a session interval runs.
///
/// Completion hooks are fire-and-forget from the engine's point of view: the
/// driver calls them after the transition has already been applied, and any
/// playback failure is the observer's own concern.
pub trait SessionObserver {
    /// Called after every applied tick with a fresh state snapshot.
    fn on_tick(&mut self, snapshot: &Event);

    /// Called when an interval completes, after the engine has stopped
    /// itself and loaded the next interval.
    fn on_complete(&mut self, event: &Event);
}

/// Drive the engine until the current interval completes.
///
/// The engine must already be running; returns `None` immediately if it is
/// not. Returns the completion event once remaining time reaches zero. The
/// caller owns the engine exclusively for the duration, which is the
/// single-writer discipline the state machine requires.
pub async fn run_interval<O: SessionObserver>(
    engine: &mut TimerEngine,
    observer: &mut O,
) -> Option<Event> {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first firing is immediate; consume it so the first decrement lands
    // a full second after start.
    ticker.tick().await;

    while engine.is_running() {
        ticker.tick().await;
        let completed = engine.tick();
        observer.on_tick(&engine.snapshot());
        if let Some(event) = completed {
            observer.on_complete(&event);
            return Some(event);
        }
    }
    None
}
