use clap::Subcommand;
use studyroom_core::stats;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Dashboard aggregates (demo dataset until a history service exists)
    Show {
        /// Output JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> studyroom_core::Result<()> {
    match action {
        StatsAction::Show { json } => {
            let report = stats::sample_report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!(
                "Total study time: {:.1}h  Sessions: {}  Streak: {} days",
                report.summary.total_hours, report.summary.sessions, report.summary.streak_days
            );
            println!("\nThis week:");
            for day in &report.weekly {
                println!("  {:<4} {:>5.1}h", day.day, day.hours);
            }
            println!("\nThis month:");
            for week in &report.monthly {
                println!("  {:<7} {:>5.1}h", week.week, week.hours);
            }
            println!("\nBy subject:");
            for tag in &report.by_tag {
                println!("  {:<10} {:>5.1}h", tag.tag, tag.hours);
            }
        }
    }
    Ok(())
}
