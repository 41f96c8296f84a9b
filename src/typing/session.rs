use super::classifier::is_correct;
use super::keys::{Key, KeyEvent};
use super::metrics::{self, Metrics, MetricsInput};
use super::timer::SessionTimer;
use crate::consts::CHARS_PER_WORD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Ends when the cursor reaches the end of `text`.
    Fixed { text: String },
    /// Ends when the text is finished or the countdown reaches zero.
    Timed { text: String, seconds: u32 },
    /// Free typing with no target. Ends on Escape.
    Zen,
}

impl SessionMode {
    fn target(&self) -> Vec<char> {
        match self {
            Self::Fixed { text } | Self::Timed { text, .. } => text.chars().collect(),
            Self::Zen => Vec::new(),
        }
    }

    pub fn countdown(&self) -> Option<u32> {
        match self {
            Self::Timed { seconds, .. } => Some(*seconds),
            _ => None,
        }
    }

    pub fn is_zen(&self) -> bool {
        matches!(self, Self::Zen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Finalized,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    /// The key had no effect in the current phase.
    Ignored,
    Typed { correct: bool },
    Erased,
    /// The key completed the session.
    Finished(SessionSummary),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    #[serde(flatten)]
    pub metrics: Metrics,
    pub consistency: u32,
    pub total_keystrokes: u64,
    pub total_errors: u64,
    pub typed_chars: usize,
}

/// One test attempt. Fed key events in timestamp order; finalizes exactly
/// once and stays frozen until [`TypingSession::reset`].
#[derive(Debug, Clone)]
pub struct TypingSession {
    mode: SessionMode,
    cheat_mode: bool,
    target: Vec<char>,
    typed: Vec<char>,
    /// Positions currently holding a wrong character.
    errors: BTreeSet<usize>,
    total_keystrokes: u64,
    total_errors: u64,
    /// Character keystrokes per elapsed second, for consistency.
    per_second: Vec<u32>,
    timer: SessionTimer,
    summary: Option<SessionSummary>,
}

impl TypingSession {
    pub fn new(mode: SessionMode, cheat_mode: bool) -> Self {
        Self {
            target: mode.target(),
            timer: SessionTimer::new(mode.countdown()),
            mode,
            cheat_mode,
            typed: Vec::new(),
            errors: BTreeSet::new(),
            total_keystrokes: 0,
            total_errors: 0,
            per_second: Vec::new(),
            summary: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.summary.is_some() {
            SessionPhase::Finalized
        } else if self.timer.is_running() {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        if self.summary.is_some() {
            return KeyOutcome::Ignored;
        }
        match event.key {
            Key::Char(c) => self.type_char(c, event.at),
            Key::Backspace => self.erase(),
            Key::Escape if self.mode.is_zen() && self.timer.is_running() => {
                KeyOutcome::Finished(self.finalize(event.at))
            }
            Key::Escape => KeyOutcome::Ignored,
        }
    }

    fn type_char(&mut self, c: char, at: Duration) -> KeyOutcome {
        let expected = if self.mode.is_zen() {
            None
        } else {
            match self.target.get(self.typed.len()) {
                Some(&e) => Some(e),
                None => return KeyOutcome::Ignored,
            }
        };

        if self.timer.start(at) {
            debug!("Session started at {:?}", at);
        }
        self.timer.record_keystroke(at);
        self.total_keystrokes += 1;
        self.bucket_keystroke(at);

        let correct = expected.map_or(true, |e| is_correct(e, c, self.cheat_mode));
        if !correct {
            self.errors.insert(self.typed.len());
            self.total_errors += 1;
        }
        self.typed.push(c);

        if !self.mode.is_zen() && self.typed.len() == self.target.len() {
            return KeyOutcome::Finished(self.finalize(at));
        }
        KeyOutcome::Typed { correct }
    }

    fn erase(&mut self) -> KeyOutcome {
        if !self.timer.is_running() || self.typed.pop().is_none() {
            return KeyOutcome::Ignored;
        }
        self.errors.remove(&self.typed.len());
        KeyOutcome::Erased
    }

    fn bucket_keystroke(&mut self, at: Duration) {
        let Some(start) = self.timer.started_at() else {
            return;
        };
        let second = at.saturating_sub(start).as_secs() as usize;
        if self.per_second.len() <= second {
            self.per_second.resize(second + 1, 0);
        }
        self.per_second[second] += 1;
    }

    /// One countdown second for timed sessions. Returns the summary when the
    /// countdown runs out.
    pub fn tick(&mut self, now: Duration) -> Option<SessionSummary> {
        if self.summary.is_some() || !self.timer.tick() {
            return None;
        }
        Some(self.finalize(now))
    }

    /// Ends a running session at `now` (host-driven stop, or end of input).
    /// Returns the existing summary if already finalized; `None` while idle.
    pub fn finish(&mut self, now: Duration) -> Option<SessionSummary> {
        match self.phase() {
            SessionPhase::Idle => None,
            SessionPhase::Running => Some(self.finalize(now)),
            SessionPhase::Finalized => self.summary,
        }
    }

    fn finalize(&mut self, now: Duration) -> SessionSummary {
        if let Some(summary) = self.summary {
            return summary;
        }
        self.timer.stop(now);
        let elapsed = self.timer.final_elapsed_secs(self.mode.is_zen());

        let samples: Vec<f64> = self
            .per_second
            .iter()
            .map(|&n| n as f64 * 60.0 / CHARS_PER_WORD)
            .collect();

        let summary = SessionSummary {
            metrics: metrics::compute(&self.metrics_input(elapsed)),
            consistency: metrics::consistency(&samples),
            total_keystrokes: self.total_keystrokes,
            total_errors: self.total_errors,
            typed_chars: self.typed.len(),
        };
        info!(
            "Session finished: {} wpm, {} raw, {}% accuracy in {}s",
            summary.metrics.wpm,
            summary.metrics.raw_wpm,
            summary.metrics.accuracy,
            summary.metrics.time_seconds
        );
        self.summary = Some(summary);
        summary
    }

    fn metrics_input(&self, elapsed_secs: f64) -> MetricsInput {
        MetricsInput {
            total_keystrokes: self.total_keystrokes,
            total_errors: self.total_errors,
            elapsed_secs,
            correct_chars: self.typed.len().saturating_sub(self.errors.len()),
            total_chars: self.typed.len(),
        }
    }

    /// Read-only metrics for display. Uses the same formulas as the final
    /// summary; after finalization it returns the summary's figures.
    pub fn live_metrics(&self, now: Duration) -> Metrics {
        if let Some(summary) = &self.summary {
            return summary.metrics;
        }
        metrics::compute(&self.metrics_input(self.timer.elapsed_secs(now)))
    }

    /// Back to Idle with the same mode and cheat setting.
    pub fn reset(&mut self) {
        self.typed.clear();
        self.errors.clear();
        self.total_keystrokes = 0;
        self.total_errors = 0;
        self.per_second.clear();
        self.timer.reset();
        self.summary = None;
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn cheat_mode(&self) -> bool {
        self.cheat_mode
    }

    pub fn cursor(&self) -> usize {
        self.typed.len()
    }

    pub fn typed_text(&self) -> String {
        self.typed.iter().collect()
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn errors(&self) -> &BTreeSet<usize> {
        &self.errors
    }

    pub fn total_keystrokes(&self) -> u64 {
        self.total_keystrokes
    }

    pub fn total_errors(&self) -> u64 {
        self.total_errors
    }

    /// Timestamp of the first accepted character.
    pub fn started_at(&self) -> Option<Duration> {
        self.timer.started_at()
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.timer.remaining_secs()
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(text: &str) -> TypingSession {
        TypingSession::new(
            SessionMode::Fixed {
                text: text.to_string(),
            },
            false,
        )
    }

    #[test]
    fn idle_until_first_character() {
        let mut s = fixed("cat");
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.handle_key(KeyEvent::backspace(0)), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(KeyEvent::escape(0)), KeyOutcome::Ignored);
        assert_eq!(s.phase(), SessionPhase::Idle);

        s.handle_key(KeyEvent::char('c', 100));
        assert_eq!(s.phase(), SessionPhase::Running);
    }

    #[test]
    fn backspace_clears_error_flag_but_not_counters() {
        let mut s = fixed("cat");
        s.handle_key(KeyEvent::char('x', 0));
        assert!(s.errors().contains(&0));
        assert_eq!(s.handle_key(KeyEvent::backspace(10)), KeyOutcome::Erased);
        assert!(s.errors().is_empty());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.handle_key(KeyEvent::backspace(20)), KeyOutcome::Ignored);
        assert_eq!(s.total_keystrokes(), 1);
        assert_eq!(s.total_errors(), 1);
    }

    #[test]
    fn finalizes_once() {
        let mut s = fixed("ab");
        s.handle_key(KeyEvent::char('a', 0));
        let first = match s.handle_key(KeyEvent::char('b', 1000)) {
            KeyOutcome::Finished(summary) => summary,
            other => panic!("expected Finished, got {:?}", other),
        };
        assert_eq!(s.phase(), SessionPhase::Finalized);
        assert_eq!(s.handle_key(KeyEvent::char('c', 2000)), KeyOutcome::Ignored);
        assert_eq!(s.finish(Duration::from_secs(9)), Some(first));
        assert_eq!(first.metrics.time_seconds, 1);
    }

    #[test]
    fn live_metrics_match_final_at_completion() {
        let mut s = fixed("cat");
        s.handle_key(KeyEvent::char('c', 0));
        s.handle_key(KeyEvent::char('a', 400));
        let live = s.live_metrics(Duration::from_millis(1000));
        s.handle_key(KeyEvent::char('t', 1000));
        let fin = s.summary().unwrap().metrics;
        assert_eq!(fin.accuracy, live.accuracy);
        // Same formula; the final figure counts the third character.
        assert_eq!(live.wpm, 24);
        assert_eq!(fin.wpm, 36);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut s = fixed("ab");
        s.handle_key(KeyEvent::char('a', 0));
        s.handle_key(KeyEvent::char('b', 500));
        s.reset();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert!(s.started_at().is_none());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.total_keystrokes(), 0);
        assert!(s.summary().is_none());
    }

    #[test]
    fn reset_restores_the_countdown() {
        let mut s = TypingSession::new(
            SessionMode::Timed {
                text: "abc".to_string(),
                seconds: 3,
            },
            false,
        );
        s.handle_key(KeyEvent::char('a', 0));
        s.tick(Duration::from_secs(1));
        assert_eq!(s.remaining_secs(), Some(2));
        s.reset();
        assert_eq!(s.remaining_secs(), Some(3));
        assert_eq!(s.target_text(), "abc");
    }
}
