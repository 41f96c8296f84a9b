use std::time::Duration;

/// Wall-clock bookkeeping for one session, driven by host timestamps.
///
/// The clock starts on the first accepted character, not when the test is
/// shown. Backspace never touches it.
#[derive(Debug, Clone, Default)]
pub struct SessionTimer {
    started_at: Option<Duration>,
    ended_at: Option<Duration>,
    last_keystroke_at: Option<Duration>,
    countdown: Option<Countdown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub total_secs: u32,
    pub remaining_secs: u32,
}

impl SessionTimer {
    pub fn new(countdown_secs: Option<u32>) -> Self {
        Self {
            countdown: countdown_secs.map(|s| Countdown {
                total_secs: s,
                remaining_secs: s,
            }),
            ..Default::default()
        }
    }

    /// Starts the clock if it is not running yet. Returns true if this call started it.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    pub fn record_keystroke(&mut self, now: Duration) {
        self.last_keystroke_at = Some(now);
    }

    /// One countdown second. Returns true exactly when the countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.countdown.as_mut() {
            Some(c) if c.remaining_secs > 0 => {
                c.remaining_secs -= 1;
                c.remaining_secs == 0
            }
            _ => false,
        }
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining_secs)
    }

    /// Stamps the end time. Only the first call has an effect.
    pub fn stop(&mut self, now: Duration) {
        if self.started_at.is_some() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    /// Seconds since start: up to `now` while running, up to the end stamp after.
    pub fn elapsed_secs(&self, now: Duration) -> f64 {
        match self.started_at {
            Some(start) => self.ended_at.unwrap_or(now).saturating_sub(start).as_secs_f64(),
            None => 0.0,
        }
    }

    /// Seconds used for final speed. Free-form sessions have no completion
    /// point, so they end at the last keystroke instead of the end stamp.
    pub fn final_elapsed_secs(&self, free_form: bool) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let end = if free_form {
            self.last_keystroke_at.or(self.ended_at)
        } else {
            self.ended_at.or(self.last_keystroke_at)
        };
        end.map(|e| e.saturating_sub(start).as_secs_f64())
            .unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.countdown.map(|c| c.total_secs));
    }
}
