#![allow(dead_code)]

use std::time::Duration;
use typeforge::config::{Config, EvolutionParams};
use typeforge::typing::{KeyEvent, SessionMode, SessionSummary, TypingSession};

pub const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

/// A short run that still exercises every phase of the loop.
pub fn small_config(generations: usize, population: usize, elitism: usize) -> Config {
    Config {
        evolution: EvolutionParams {
            generations,
            population,
            elitism,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn fixed_session(text: &str) -> TypingSession {
    TypingSession::new(
        SessionMode::Fixed {
            text: text.to_string(),
        },
        false,
    )
}

/// Feeds `events` in order and returns the summary if one was produced.
pub fn replay(session: &mut TypingSession, events: &[KeyEvent]) -> Option<SessionSummary> {
    let mut summary = None;
    for &event in events {
        if let typeforge::typing::KeyOutcome::Finished(s) = session.handle_key(event) {
            summary = Some(s);
        }
    }
    summary
}

/// One correct keystroke per character, `step_ms` apart, starting at 0.
pub fn type_text(text: &str, step_ms: u64) -> Vec<KeyEvent> {
    text.chars()
        .enumerate()
        .map(|(i, c)| KeyEvent::char(c, i as u64 * step_ms))
        .collect()
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}
