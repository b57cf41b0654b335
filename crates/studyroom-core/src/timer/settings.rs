use serde::{Deserialize, Serialize};

use super::Mode;
use crate::error::ValidationError;

/// Configured interval durations.
///
/// Immutable during a run: the engine only consults these when it loads an
/// interval, so replacing settings mid-countdown never corrupts the
/// remaining time. All four fields must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Every Nth completed focus interval is followed by a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
}

fn default_focus_minutes() -> u32 {
    25
}
fn default_short_break_minutes() -> u32 {
    5
}
fn default_long_break_minutes() -> u32 {
    15
}
fn default_sessions_until_long_break() -> u32 {
    4
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sessions_until_long_break: default_sessions_until_long_break(),
        }
    }
}

impl TimerSettings {
    /// Reject zero durations before they can reach the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("focus_minutes", self.focus_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
            ("sessions_until_long_break", self.sessions_until_long_break),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        Ok(())
    }

    /// Configured duration for `mode`, in whole minutes.
    pub fn duration_minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured duration for `mode`, in seconds.
    pub fn duration_seconds(&self, mode: Mode) -> u64 {
        self.duration_minutes(mode) as u64 * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = TimerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.focus_minutes, 25);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.long_break_minutes, 15);
        assert_eq!(settings.sessions_until_long_break, 4);
    }

    #[test]
    fn zero_duration_rejected() {
        let settings = TimerSettings {
            focus_minutes: 0,
            ..TimerSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = TimerSettings {
            sessions_until_long_break: 0,
            ..TimerSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn duration_lookup_by_mode() {
        let settings = TimerSettings::default();
        assert_eq!(settings.duration_minutes(Mode::Focus), 25);
        assert_eq!(settings.duration_minutes(Mode::ShortBreak), 5);
        assert_eq!(settings.duration_minutes(Mode::LongBreak), 15);
        assert_eq!(settings.duration_seconds(Mode::Focus), 1500);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: TimerSettings = toml::from_str("focus_minutes = 50").unwrap();
        assert_eq!(settings.focus_minutes, 50);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.sessions_until_long_break, 4);
    }
}
