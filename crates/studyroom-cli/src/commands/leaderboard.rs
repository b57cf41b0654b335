use clap::Subcommand;
use studyroom_core::{leaderboard, Leaderboard, Period};

#[derive(Subcommand)]
pub enum LeaderboardAction {
    /// List ranked users
    List {
        /// Board to show: global, friends, or subjects
        #[arg(long, default_value = "global")]
        scope: String,
        /// Filter by name or handle
        #[arg(long)]
        search: Option<String>,
        /// Restrict to one subject (exact match)
        #[arg(long)]
        subject: Option<String>,
        /// Ranking window: all-time, week, month, or year
        #[arg(long, default_value = "all-time")]
        period: String,
        /// Output JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LeaderboardAction) -> studyroom_core::Result<()> {
    match action {
        LeaderboardAction::List {
            scope,
            search,
            subject,
            period,
            json,
        } => {
            let mut board = board_for(&scope)?;
            if let Some(subject) = &subject {
                board = board.for_subject(subject);
            }
            let period = period_for(&period)?;
            let results = match &search {
                Some(query) => board.search(query),
                None => board.ranked(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            println!("Leaderboard: {scope} ({})", period.label());
            if results.is_empty() {
                println!("  no matches");
            }
            for ranked in &results {
                println!(
                    "  {:>2}. {} ({})  {} hrs  {}",
                    ranked.rank,
                    ranked.entry.name,
                    ranked.entry.handle,
                    ranked.entry.hours,
                    ranked.entry.country
                );
            }
        }
    }
    Ok(())
}

fn board_for(scope: &str) -> studyroom_core::Result<Leaderboard> {
    match scope {
        "global" => Ok(leaderboard::sample_global()),
        "friends" => Ok(leaderboard::sample_friends()),
        "subjects" => Ok(leaderboard::sample_subjects()),
        other => Err(studyroom_core::ValidationError::InvalidValue {
            field: "scope".into(),
            message: format!("unknown scope '{other}', expected global, friends, or subjects"),
        }
        .into()),
    }
}

fn period_for(period: &str) -> studyroom_core::Result<Period> {
    match period {
        "all-time" => Ok(Period::AllTime),
        "week" => Ok(Period::Week),
        "month" => Ok(Period::Month),
        "year" => Ok(Period::Year),
        other => Err(studyroom_core::ValidationError::InvalidValue {
            field: "period".into(),
            message: format!("unknown period '{other}', expected all-time, week, month, or year"),
        }
        .into()),
    }
}
