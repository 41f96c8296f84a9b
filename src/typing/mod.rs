pub mod classifier;
pub mod keys;
pub mod lines;
pub mod metrics;
pub mod session;
pub mod timer;

pub use self::keys::{Key, KeyEvent};
pub use self::metrics::Metrics;
pub use self::session::{KeyOutcome, SessionMode, SessionPhase, SessionSummary, TypingSession};
