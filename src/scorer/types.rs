use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line Score (clamped at zero)
    pub fitness: f64,
    // Unclamped bonus minus penalty
    pub raw_score: f64,

    // Components (both stored as positive magnitudes)
    pub home_row_bonus: f64,
    pub distance_penalty: f64,

    // === STATISTICAL COUNTERS (Raw Occurrence Sums) ===
    pub total_bigrams: f64,
    pub scored_bigrams: f64,
    // Bigrams with a character that has no key on the layout
    pub skipped_bigrams: f64,

    // Share of scored bigram keystrokes that land on the home row (0..1)
    pub home_row_share: f64,
    // Mean grid steps per scored bigram
    pub mean_distance: f64,
}
