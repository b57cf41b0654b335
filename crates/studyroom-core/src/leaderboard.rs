//! Leaderboard rankings over externally supplied hour totals.
//!
//! Ranking, search, and subject filtering only - the list UI, avatars, and
//! any real user service stay outside the core. Until a backend exists the
//! boards are the static sample datasets below.

use serde::{Deserialize, Serialize};

/// Ranking window. The sample boards are all-time; the window is carried on
/// queries so a real backend can honor it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    AllTime,
    Week,
    Month,
    Year,
}

impl Period {
    pub fn label(self) -> &'static str {
        match self {
            Period::AllTime => "All Time",
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }
}

/// One user on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: String,
    pub handle: String,
    pub hours: f64,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// An entry with its 1-based position on a (possibly filtered) board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// A board of users ranked by study hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ranked by hours, highest first. Ties keep insertion
    /// order.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank(self.entries.iter().cloned().collect())
    }

    /// Entries whose name or handle contains `query`, case-insensitively,
    /// re-ranked from 1 - a filtered list shows its own positions, matching
    /// how the board renders.
    pub fn search(&self, query: &str) -> Vec<RankedEntry> {
        let needle = query.to_lowercase();
        rank(self
            .entries
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.handle.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    /// Sub-board of entries tagged with `subject` (exact match).
    pub fn for_subject(&self, subject: &str) -> Leaderboard {
        Leaderboard::new(
            self.entries
                .iter()
                .filter(|e| e.subject.as_deref() == Some(subject))
                .cloned()
                .collect(),
        )
    }
}

fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.hours
            .partial_cmp(&a.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index as u32 + 1,
            entry,
        })
        .collect()
}

fn entry(id: u32, name: &str, handle: &str, hours: f64, country: &str) -> LeaderboardEntry {
    LeaderboardEntry {
        id,
        name: name.to_string(),
        handle: handle.to_string(),
        hours,
        country: country.to_string(),
        subject: None,
    }
}

/// The global sample board.
pub fn sample_global() -> Leaderboard {
    Leaderboard::new(vec![
        entry(1, "Alex Johnson", "@alexj", 156.0, "US"),
        entry(2, "Maria Garcia", "@mariag", 142.0, "ES"),
        entry(3, "Hiroshi Tanaka", "@hiroshi", 135.0, "JP"),
        entry(4, "Sarah Wilson", "@sarahw", 129.0, "CA"),
        entry(5, "Omar Hassan", "@omarh", 118.0, "EG"),
        entry(6, "Emma Thompson", "@emmat", 112.0, "UK"),
        entry(7, "Liu Wei", "@liuw", 105.0, "CN"),
        entry(8, "Carlos Mendoza", "@carlosm", 98.0, "MX"),
        entry(9, "Priya Sharma", "@priyas", 92.0, "IN"),
        entry(10, "Daniel Kim", "@danielk", 87.0, "KR"),
    ])
}

/// The friends sample board.
pub fn sample_friends() -> Leaderboard {
    Leaderboard::new(vec![
        entry(2, "Maria Garcia", "@mariag", 142.0, "ES"),
        entry(5, "Omar Hassan", "@omarh", 118.0, "EG"),
        entry(7, "Liu Wei", "@liuw", 105.0, "CN"),
    ])
}

/// The per-subject sample board.
pub fn sample_subjects() -> Leaderboard {
    let tagged = |id, name: &str, handle: &str, hours, country: &str, subject: &str| {
        LeaderboardEntry {
            subject: Some(subject.to_string()),
            ..entry(id, name, handle, hours, country)
        }
    };
    Leaderboard::new(vec![
        tagged(1, "Alex Johnson", "@alexj", 45.0, "US", "Mathematics"),
        tagged(3, "Hiroshi Tanaka", "@hiroshi", 42.0, "JP", "Mathematics"),
        tagged(6, "Emma Thompson", "@emmat", 38.0, "UK", "Mathematics"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_sorts_by_hours_descending() {
        let board = Leaderboard::new(vec![
            entry(1, "Low", "@low", 10.0, "US"),
            entry(2, "High", "@high", 100.0, "US"),
            entry(3, "Mid", "@mid", 50.0, "US"),
        ]);
        let ranked = board.ranked();
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].entry.name, "High");
        assert_eq!(ranked[1].entry.name, "Mid");
        assert_eq!(ranked[2].entry.name, "Low");
    }

    #[test]
    fn search_matches_name_and_handle_case_insensitively() {
        let board = sample_global();
        let by_name = board.search("maria");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].entry.handle, "@mariag");

        let by_handle = board.search("@LIU");
        assert_eq!(by_handle.len(), 1);
        assert_eq!(by_handle[0].entry.name, "Liu Wei");
    }

    #[test]
    fn filtered_results_rank_from_one() {
        let board = sample_global();
        // Liu Wei is rank 7 globally but rank 1 of the matches.
        let results = board.search("liu");
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn search_with_no_matches_is_empty() {
        assert!(sample_global().search("nobody").is_empty());
    }

    #[test]
    fn subject_filter_keeps_exact_matches_only() {
        let board = sample_subjects();
        assert_eq!(board.for_subject("Mathematics").len(), 3);
        assert!(board.for_subject("Science").is_empty());
    }

    #[test]
    fn sample_global_ranks_match_hours_order() {
        let ranked = sample_global().ranked();
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].entry.name, "Alex Johnson");
        assert_eq!(ranked[9].entry.name, "Daniel Kim");
        assert!(ranked.windows(2).all(|w| w[0].entry.hours >= w[1].entry.hours));
    }

    #[test]
    fn period_labels() {
        assert_eq!(Period::AllTime.label(), "All Time");
        assert_eq!(Period::Week.label(), "This Week");
    }

    #[test]
    fn ranked_entry_flattens_in_json() {
        let ranked = sample_global().ranked();
        let json = serde_json::to_string(&ranked[0]).unwrap();
        assert!(json.contains("\"rank\":1"));
        assert!(json.contains("\"name\":\"Alex Johnson\""));
    }
}
