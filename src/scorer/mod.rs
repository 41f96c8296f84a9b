pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::FitnessWeights;
use crate::corpus::{count_bigrams, BigramCounts};
use crate::geometry::DistanceTable;
use crate::layouts::Layout;
use tracing::debug;

/// A bigram both of whose characters could appear on a layout.
#[derive(Debug, Clone, Copy)]
pub struct BigramEntry {
    pub first: u8,
    pub second: u8,
    pub count: f64,
}

/// The fitness model. Owns the corpus statistics, which are derived once and
/// then shared read-only by every evaluation of a run.
pub struct Scorer {
    pub weights: FitnessWeights,
    pub counts: BigramCounts,

    // --- Data Tables (Fast Lookups) ---
    pub entries: Vec<BigramEntry>,
    pub unplaceable: f64,
    pub distances: DistanceTable,
}

impl Scorer {
    pub fn new(counts: BigramCounts, weights: FitnessWeights) -> Self {
        let mut entries = Vec::with_capacity(counts.len());
        let mut unplaceable = 0.0;

        for ([a, b], count) in counts.iter() {
            if a.is_ascii() && b.is_ascii() {
                entries.push(BigramEntry {
                    first: a as u8,
                    second: b as u8,
                    count: count as f64,
                });
            } else {
                unplaceable += count as f64;
            }
        }

        debug!(
            "Scorer ready: {} distinct bigrams ({} placeable), {} total occurrences",
            counts.len(),
            entries.len(),
            counts.total()
        );

        Self {
            weights,
            counts,
            entries,
            unplaceable,
            distances: DistanceTable::new(),
        }
    }

    /// Counts the corpus bigrams once and builds a scorer around them.
    pub fn from_corpus(corpus: &str, weights: FitnessWeights) -> Self {
        Self::new(count_bigrams(corpus), weights)
    }

    /// Optimized scoring for the evolution loop (Fast)
    pub fn fitness(&self, layout: &Layout) -> f64 {
        engine::fitness(self, &layout.pos_map())
    }

    /// Detailed scoring for reports (Rich Data)
    pub fn score_details(&self, layout: &Layout) -> ScoreDetails {
        engine::score_details(self, &layout.pos_map())
    }
}
