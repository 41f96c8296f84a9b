use super::{ScoreDetails, Scorer};
use crate::consts::POS_NOT_FOUND;
use crate::geometry::is_home_row;

/// Fast Path: Used by the Optimizer.
///
/// Each bigram earns `count * home_row_bonus` per character on the home row
/// and loses `count * distance_penalty` per grid step between its keys.
/// Bigrams with a character missing from the layout are skipped. The total
/// is clamped at zero, so an empty corpus scores 0 for every layout.
pub fn fitness(scorer: &Scorer, pos_map: &[u8; 128]) -> f64 {
    let bonus = scorer.weights.home_row_bonus;
    let penalty = scorer.weights.distance_penalty;
    let mut score = 0.0;

    for e in &scorer.entries {
        let p1 = pos_map[e.first as usize];
        let p2 = pos_map[e.second as usize];
        if p1 == POS_NOT_FOUND || p2 == POS_NOT_FOUND {
            continue;
        }
        let (p1, p2) = (p1 as usize, p2 as usize);

        if is_home_row(p1) {
            score += e.count * bonus;
        }
        if is_home_row(p2) {
            score += e.count * bonus;
        }
        score -= scorer.distances.get(p1, p2) as f64 * e.count * penalty;
    }

    score.max(0.0)
}

/// Detailed Path: Used by reports. Same arithmetic as [`fitness`], kept
/// component by component.
pub fn score_details(scorer: &Scorer, pos_map: &[u8; 128]) -> ScoreDetails {
    let bonus = scorer.weights.home_row_bonus;
    let penalty = scorer.weights.distance_penalty;
    let mut d = ScoreDetails {
        skipped_bigrams: scorer.unplaceable,
        ..Default::default()
    };

    let mut home_hits = 0.0;
    let mut steps = 0.0;

    for e in &scorer.entries {
        d.total_bigrams += e.count;

        let p1 = pos_map[e.first as usize];
        let p2 = pos_map[e.second as usize];
        if p1 == POS_NOT_FOUND || p2 == POS_NOT_FOUND {
            d.skipped_bigrams += e.count;
            continue;
        }
        let (p1, p2) = (p1 as usize, p2 as usize);
        d.scored_bigrams += e.count;

        for p in [p1, p2] {
            if is_home_row(p) {
                d.home_row_bonus += e.count * bonus;
                home_hits += e.count;
            }
        }

        let dist = scorer.distances.get(p1, p2) as f64;
        steps += dist * e.count;
        d.distance_penalty += dist * e.count * penalty;
    }

    d.total_bigrams += scorer.unplaceable;
    d.raw_score = d.home_row_bonus - d.distance_penalty;
    d.fitness = d.raw_score.max(0.0);

    if d.scored_bigrams > 0.0 {
        d.home_row_share = home_hits / (d.scored_bigrams * 2.0);
        d.mean_distance = steps / d.scored_bigrams;
    }
    d
}

#[cfg(test)]
mod tests {
    use crate::config::FitnessWeights;
    use crate::layouts::Layout;
    use crate::scorer::Scorer;

    #[test]
    fn home_row_pair_scores_bonus_minus_distance() {
        // a(24) and s(25) are both on the home row, one step apart.
        let scorer = Scorer::from_corpus("as", FitnessWeights::default());
        let score = scorer.fitness(&Layout::qwerty());
        assert!((score - 3.9).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn negative_totals_clamp_to_zero() {
        // q(12) -> p(21) is five steps apart, neither on the home row.
        let scorer = Scorer::from_corpus("qp", FitnessWeights::default());
        assert_eq!(scorer.fitness(&Layout::qwerty()), 0.0);
        let details = scorer.score_details(&Layout::qwerty());
        assert!((details.raw_score + 0.5).abs() < 1e-9);
    }

    #[test]
    fn details_agree_with_fast_path() {
        let scorer = Scorer::from_corpus(
            "the quick brown fox jumps over the lazy dog",
            FitnessWeights::default(),
        );
        let layout = Layout::qwerty();
        let fast = scorer.fitness(&layout);
        let details = scorer.score_details(&layout);
        assert!((fast - details.fitness).abs() < 1e-9);
    }
}
