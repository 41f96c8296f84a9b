use crate::reports;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use typeforge::error::{TfResult, TypeForgeError};
use typeforge::typing::keys::read_event_log;
use typeforge::typing::{KeyOutcome, SessionMode, SessionSummary, TypingSession};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Target text (ignored with --zen)
    #[arg(long, default_value = "")]
    pub text: String,

    /// CSV keystroke log with `key,timestamp_ms` columns
    #[arg(long)]
    pub events: PathBuf,

    /// Count every key as correct except a stray backslash
    #[arg(long, default_value_t = false)]
    pub cheat: bool,

    /// Free typing with no target text
    #[arg(long, default_value_t = false, conflicts_with = "duration")]
    pub zen: bool,

    /// Time-box the test to this many seconds
    #[arg(long)]
    pub duration: Option<u32>,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ReplayArgs) -> TfResult<()> {
    let mode = if args.zen {
        SessionMode::Zen
    } else if args.text.is_empty() {
        return Err(TypeForgeError::Config(
            "--text is required unless --zen is given".to_string(),
        ));
    } else if let Some(seconds) = args.duration {
        SessionMode::Timed {
            text: args.text.clone(),
            seconds,
        }
    } else {
        SessionMode::Fixed {
            text: args.text.clone(),
        }
    };

    let events = read_event_log(File::open(&args.events)?)?;
    info!("Replaying {} key events", events.len());

    let mut session = TypingSession::new(mode, args.cheat);
    let mut last_at = None;
    let mut summary = None;

    for event in events {
        summary = deliver_ticks(&mut session, event.at);
        if summary.is_some() {
            break;
        }

        last_at = Some(event.at);
        match session.handle_key(event) {
            KeyOutcome::Finished(s) => {
                summary = Some(s);
                break;
            }
            outcome => debug!("{:?} at {:?} -> {:?}", event.key, event.at, outcome),
        }
    }

    // A countdown keeps running after the last key until it expires.
    if summary.is_none() {
        summary = run_out_countdown(&mut session);
    }

    let summary = match summary {
        Some(s) => s,
        None => match last_at.and_then(|at| session.finish(at)) {
            Some(s) => {
                warn!("Log ended before the session completed; scoring what was typed");
                s
            }
            None => {
                return Err(TypeForgeError::Validation(
                    "no characters were typed".to_string(),
                ))
            }
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_session_report(&summary);
    }
    Ok(())
}

fn run_out_countdown(session: &mut TypingSession) -> Option<SessionSummary> {
    let start = session.started_at()?;
    let total = session.mode().countdown()?;
    deliver_ticks(session, start + Duration::from_secs(u64::from(total)))
}

/// Delivers the countdown seconds that fall on or before `until`.
fn deliver_ticks(session: &mut TypingSession, until: Duration) -> Option<SessionSummary> {
    let start = session.started_at()?;
    let total = session.mode().countdown()?;
    while let Some(remaining) = session.remaining_secs().filter(|&r| r > 0) {
        let next = start + Duration::from_secs(u64::from(total - remaining + 1));
        if next > until {
            break;
        }
        if let Some(summary) = session.tick(next) {
            return Some(summary);
        }
    }
    None
}
