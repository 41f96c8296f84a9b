use crate::error::{TfResult, TypeForgeError};
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// A key the session reacts to. Everything else a host might send
/// (modifiers, arrows, function keys) has no meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Escape,
}

impl Key {
    /// Parses a raw key identifier: a single printable character or one of
    /// `Backspace`, `Escape`, `Space`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Esc" => Some(Self::Escape),
            "Space" => Some(Self::Char(' ')),
            _ => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// A key press stamped with the host's high-resolution clock. Only
/// differences between timestamps matter, so the origin is arbitrary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub at: Duration,
}

impl KeyEvent {
    pub fn new(key: Key, at: Duration) -> Self {
        Self { key, at }
    }

    pub fn char(c: char, at_ms: u64) -> Self {
        Self::new(Key::Char(c), Duration::from_millis(at_ms))
    }

    pub fn backspace(at_ms: u64) -> Self {
        Self::new(Key::Backspace, Duration::from_millis(at_ms))
    }

    pub fn escape(at_ms: u64) -> Self {
        Self::new(Key::Escape, Duration::from_millis(at_ms))
    }
}

#[derive(Debug, Deserialize)]
struct RawKeyRecord {
    key: String,
    timestamp_ms: f64,
}

/// Reads a `key,timestamp_ms` CSV keystroke log. Keys the session does not
/// understand are dropped.
pub fn read_event_log<R: Read>(reader: R) -> TfResult<Vec<KeyEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut events = Vec::new();
    for (row, result) in rdr.deserialize::<RawKeyRecord>().enumerate() {
        let rec = result?;
        if !rec.timestamp_ms.is_finite() || rec.timestamp_ms < 0.0 {
            return Err(TypeForgeError::Validation(format!(
                "row {}: timestamp must be a non-negative number, got {}",
                row + 1,
                rec.timestamp_ms
            )));
        }
        let at = Duration::try_from_secs_f64(rec.timestamp_ms / 1000.0).map_err(|_| {
            TypeForgeError::Validation(format!(
                "row {}: timestamp out of range: {}",
                row + 1,
                rec.timestamp_ms
            ))
        })?;
        match Key::parse(&rec.key) {
            Some(key) => events.push(KeyEvent::new(key, at)),
            None => debug!("row {}: ignoring key '{}'", row + 1, rec.key),
        }
    }
    Ok(events)
}
