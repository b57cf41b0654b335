//! Study-session aggregation for the dashboard.
//!
//! The dashboard renders aggregates only; this module owns the arithmetic.
//! Records live in memory for the current run - durable history is an
//! external service's concern.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One completed focus interval, as reported by the timer's completion
/// event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub completed_at: DateTime<Utc>,
    pub focus_seconds: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Hours studied on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub day: String,
    pub hours: f64,
}

/// Hours studied in one week bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekHours {
    pub week: String,
    pub hours: f64,
}

/// Hours studied per session tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagHours {
    pub tag: String,
    pub hours: f64,
}

/// Headline numbers for the dashboard tiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_hours: f64,
    pub sessions: u32,
    /// Consecutive days with at least one completed session, ending today
    /// or yesterday.
    pub streak_days: u32,
}

/// Complete dashboard report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardReport {
    pub summary: DashboardSummary,
    /// Last 7 days, oldest first.
    pub weekly: Vec<DayHours>,
    /// Last 28 days in four 7-day buckets, oldest first.
    pub monthly: Vec<WeekHours>,
    /// Per-tag hours, highest first.
    pub by_tag: Vec<TagHours>,
}

/// In-memory log of completed focus intervals for the current run.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    records: Vec<SessionRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    /// Record a focus completion that just happened.
    pub fn record_completion(&mut self, focus_seconds: u64, tags: &[String]) {
        self.push(SessionRecord {
            completed_at: Utc::now(),
            focus_seconds,
            tags: tags.to_vec(),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate everything the dashboard needs, relative to `now`.
    pub fn report(&self, now: DateTime<Utc>) -> DashboardReport {
        DashboardReport {
            summary: self.summary(now),
            weekly: self.weekly(now),
            monthly: self.monthly(now),
            by_tag: self.by_tag(),
        }
    }

    fn summary(&self, now: DateTime<Utc>) -> DashboardSummary {
        let total_seconds: u64 = self.records.iter().map(|r| r.focus_seconds).sum();
        DashboardSummary {
            total_hours: round_hours(total_seconds),
            sessions: self.records.len() as u32,
            streak_days: self.streak_days(now),
        }
    }

    fn streak_days(&self, now: DateTime<Utc>) -> u32 {
        let dates: HashSet<NaiveDate> = self
            .records
            .iter()
            .map(|r| r.completed_at.date_naive())
            .collect();
        let today = now.date_naive();
        // A streak survives until a full day is missed.
        let mut day = if dates.contains(&today) {
            today
        } else {
            today - Duration::days(1)
        };
        let mut streak = 0;
        while dates.contains(&day) {
            streak += 1;
            day = day - Duration::days(1);
        }
        streak
    }

    fn weekly(&self, now: DateTime<Utc>) -> Vec<DayHours> {
        let today = now.date_naive();
        let mut per_day: HashMap<NaiveDate, u64> = HashMap::new();
        for record in &self.records {
            *per_day.entry(record.completed_at.date_naive()).or_default() +=
                record.focus_seconds;
        }
        (0..7)
            .rev()
            .map(|days_ago| {
                let date = today - Duration::days(days_ago);
                DayHours {
                    day: day_label(date.weekday()).to_string(),
                    hours: round_hours(per_day.get(&date).copied().unwrap_or(0)),
                }
            })
            .collect()
    }

    fn monthly(&self, now: DateTime<Utc>) -> Vec<WeekHours> {
        let today = now.date_naive();
        let mut buckets = [0u64; 4];
        for record in &self.records {
            let days_ago = (today - record.completed_at.date_naive()).num_days();
            if (0..28).contains(&days_ago) {
                // Bucket 0 is the oldest week.
                buckets[3 - (days_ago / 7) as usize] += record.focus_seconds;
            }
        }
        buckets
            .iter()
            .enumerate()
            .map(|(index, &seconds)| WeekHours {
                week: format!("Week {}", index + 1),
                hours: round_hours(seconds),
            })
            .collect()
    }

    fn by_tag(&self) -> Vec<TagHours> {
        let mut per_tag: HashMap<&str, u64> = HashMap::new();
        for record in &self.records {
            for tag in &record.tags {
                *per_tag.entry(tag.as_str()).or_default() += record.focus_seconds;
            }
        }
        let mut entries: Vec<TagHours> = per_tag
            .into_iter()
            .map(|(tag, seconds)| TagHours {
                tag: tag.to_string(),
                hours: round_hours(seconds),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.hours
                .partial_cmp(&a.hours)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.tag.cmp(&b.tag))
        });
        entries
    }
}

fn day_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Seconds to hours, one decimal.
fn round_hours(seconds: u64) -> f64 {
    (seconds as f64 / 360.0).round() / 10.0
}

/// Static demo dataset backing the dashboard until a real history service
/// feeds it.
pub fn sample_report() -> DashboardReport {
    let day = |day: &str, hours: f64| DayHours {
        day: day.to_string(),
        hours,
    };
    let week = |week: &str, hours: f64| WeekHours {
        week: week.to_string(),
        hours,
    };
    let tag = |tag: &str, hours: f64| TagHours {
        tag: tag.to_string(),
        hours,
    };
    DashboardReport {
        summary: DashboardSummary {
            total_hours: 42.5,
            sessions: 23,
            streak_days: 5,
        },
        weekly: vec![
            day("Mon", 2.5),
            day("Tue", 3.2),
            day("Wed", 1.8),
            day("Thu", 4.0),
            day("Fri", 2.7),
            day("Sat", 5.1),
            day("Sun", 1.5),
        ],
        monthly: vec![
            week("Week 1", 14.3),
            week("Week 2", 16.8),
            week("Week 3", 12.5),
            week("Week 4", 18.2),
        ],
        by_tag: vec![
            tag("Coding", 15.2),
            tag("Math", 12.5),
            tag("Science", 8.3),
            tag("Language", 6.7),
            tag("History", 4.8),
        ],
    }
}
