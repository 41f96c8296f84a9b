use fastrand::Rng;

/// Samples `size` individuals with replacement and returns the index of the
/// fittest. Reads the generation's precomputed fitness; never re-scores.
pub fn tournament_select(fitness: &[f64], size: usize, rng: &mut Rng) -> usize {
    let len = fitness.len();
    let mut best_idx = rng.usize(0..len);
    let mut best_fit = fitness[best_idx];
    for _ in 1..size {
        let idx = rng.usize(0..len);
        if fitness[idx] > best_fit {
            best_fit = fitness[idx];
            best_idx = idx;
        }
    }
    best_idx
}

/// Indices ordered by fitness, best first. Ties keep population order.
pub fn rank_by_fitness(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));
    order
}
