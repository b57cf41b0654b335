//! # Studyroom Core Library
//!
//! Core business logic for Studyroom, a study-session tracker. It follows a
//! CLI-first philosophy: every operation is available through the standalone
//! CLI binary, and any GUI is a thin layer over this same library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a per-second countdown state machine; the caller
//!   drives it by invoking `tick()` once per elapsed second (the session
//!   driver does this on a tokio interval)
//! - **Tags**: free-text labels scoped to the current session
//! - **Stats**: in-memory session log and the dashboard aggregates
//! - **Leaderboard**: ranking and search over supplied hour totals
//! - **Config**: TOML user configuration that feeds the engine its settings
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`run_interval`]: drives one interval against wall time, forwarding
//!   events to a [`SessionObserver`]
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod leaderboard;
pub mod stats;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use leaderboard::{Leaderboard, LeaderboardEntry, Period, RankedEntry};
pub use stats::{DashboardReport, SessionLog, SessionRecord};
pub use timer::{run_interval, Mode, SessionObserver, TagSet, TimerEngine, TimerSettings};
