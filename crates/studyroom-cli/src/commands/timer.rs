use std::io::Write as _;

use chrono::Utc;
use clap::Subcommand;
use studyroom_core::config::NotificationsConfig;
use studyroom_core::{
    run_interval, Config, Event, Mode, SessionLog, SessionObserver, TimerEngine,
};

use crate::format;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run an interactive session loop in the terminal
    Run {
        /// Focus interval length in minutes
        #[arg(long)]
        focus: Option<u32>,
        /// Short break length in minutes
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break length in minutes
        #[arg(long)]
        long_break: Option<u32>,
        /// Focus intervals between long breaks
        #[arg(long)]
        until_long_break: Option<u32>,
        /// Tag the session (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Stop after this many completed intervals
        #[arg(long)]
        intervals: Option<u32>,
    },
    /// Print the effective timer settings as JSON
    Settings,
}

/// Renders the countdown and relays completion notifications.
///
/// The bell is best-effort: the engine only emits the event, and a terminal
/// that swallows the bell is silently ignored.
struct TerminalObserver {
    notifications: NotificationsConfig,
    tags: Vec<String>,
    focus_seconds: u64,
    log: SessionLog,
}

impl SessionObserver for TerminalObserver {
    fn on_tick(&mut self, snapshot: &Event) {
        if let Event::StateSnapshot {
            mode,
            remaining_minutes,
            remaining_seconds,
            elapsed_focus_seconds,
            ..
        } = snapshot
        {
            if mode.is_focus() {
                print!(
                    "\r{} {:02}:{:02}  (elapsed {})   ",
                    mode.label(),
                    remaining_minutes,
                    remaining_seconds,
                    format::clock(*elapsed_focus_seconds)
                );
            } else {
                print!(
                    "\r{} {:02}:{:02}   ",
                    mode.label(),
                    remaining_minutes,
                    remaining_seconds
                );
            }
            let _ = std::io::stdout().flush();
        }
    }

    fn on_complete(&mut self, event: &Event) {
        println!();
        if self.notifications.enabled {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
        if let Event::IntervalCompleted {
            completed,
            sessions_completed,
            total_focus_seconds,
            ..
        } = event
        {
            if completed.is_focus() {
                self.log.record_completion(self.focus_seconds, &self.tags);
                println!(
                    "Time to take a break! ({} sessions, {} studied)",
                    sessions_completed,
                    format::hours_minutes(*total_focus_seconds)
                );
            } else {
                println!("Break finished! Ready to focus?");
            }
        }
    }
}

pub fn run(action: TimerAction) -> studyroom_core::Result<()> {
    let config = Config::load()?;

    match action {
        TimerAction::Run {
            focus,
            short_break,
            long_break,
            until_long_break,
            tags,
            intervals,
        } => {
            let mut settings = config.timer;
            if let Some(minutes) = focus {
                settings.focus_minutes = minutes;
            }
            if let Some(minutes) = short_break {
                settings.short_break_minutes = minutes;
            }
            if let Some(minutes) = long_break {
                settings.long_break_minutes = minutes;
            }
            if let Some(count) = until_long_break {
                settings.sessions_until_long_break = count;
            }

            let mut engine = TimerEngine::new(settings)?;
            for tag in &tags {
                engine.add_tag(tag);
            }
            let mut observer = TerminalObserver {
                notifications: config.notifications,
                tags,
                focus_seconds: settings.duration_seconds(Mode::Focus),
                log: SessionLog::new(),
            };

            let runtime = tokio::runtime::Runtime::new()?;
            let mut completed = 0u32;
            loop {
                println!(
                    "{} {}  (Ctrl-C to quit)",
                    engine.mode().label(),
                    engine.remaining_clock()
                );
                engine.start();
                let Some(event) = runtime.block_on(run_interval(&mut engine, &mut observer))
                else {
                    break;
                };
                completed += 1;
                if intervals.is_some_and(|limit| completed >= limit) {
                    break;
                }
                let Event::IntervalCompleted { next, .. } = event else {
                    break;
                };
                // The engine stops at every boundary; the next interval
                // waits for an explicit acknowledgment.
                prompt_enter(next)?;
            }

            println!(
                "\nSessions: {}  Total study time: {}",
                engine.sessions_completed(),
                format::hours_minutes(engine.total_focus_seconds())
            );
            if !observer.log.is_empty() {
                let report = observer.log.report(Utc::now());
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        TimerAction::Settings => {
            println!("{}", serde_json::to_string_pretty(&config.timer)?);
        }
    }

    Ok(())
}

fn prompt_enter(next: Mode) -> studyroom_core::Result<()> {
    print!("Press Enter to start {}... ", next.label());
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(())
}
