mod common;

use fastrand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use typeforge::config::FitnessWeights;
use typeforge::optimizer::initialization::random_population;
use typeforge::optimizer::{LayoutTemplate, OptimizationOptions, Optimizer, SilentProgress};
use typeforge::scorer::Scorer;

fn optimizer(corpus: &str, options: OptimizationOptions) -> Optimizer {
    let scorer = Arc::new(Scorer::from_corpus(corpus, FitnessWeights::default()));
    Optimizer::new(scorer, LayoutTemplate::qwerty(), options).unwrap()
}

fn options(generations: usize, population_size: usize, elitism: usize) -> OptimizationOptions {
    OptimizationOptions {
        generations,
        population_size,
        elitism,
        ..Default::default()
    }
}

#[test]
fn single_generation_keeps_the_best_initial_individual() {
    let corpus = "the quick brown fox";
    let opts = options(1, 4, 1);
    let result = optimizer(corpus, opts.clone()).run(&SilentProgress);

    let template = LayoutTemplate::qwerty();
    assert_eq!(result.layout.to_string().len(), 45);
    assert!(template.conforms(&result.layout));

    let scorer = Scorer::from_corpus(corpus, FitnessWeights::default());
    let initial = random_population(&template, 4, &mut Rng::with_seed(opts.seed));
    let beaten = initial
        .iter()
        .filter(|l| result.fitness >= scorer.fitness(l))
        .count();
    assert!(beaten >= 3, "best beat only {} of 4", beaten);
    assert!(initial.contains(&result.layout));
}

#[test]
fn same_seed_same_layout() {
    let a = optimizer(common::PANGRAM, options(15, 30, 2)).run(&SilentProgress);
    let b = optimizer(common::PANGRAM, options(15, 30, 2)).run(&SilentProgress);
    assert_eq!(a.layout, b.layout);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.history, b.history);
}

#[test]
fn best_ever_never_decreases() {
    let result = optimizer(common::PANGRAM, options(25, 20, 0)).run(&SilentProgress);
    assert_eq!(result.history.len(), 25);
    assert!(result.history.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(result.history.last().copied(), Some(result.fitness));
}

#[test]
fn later_generations_score_at_least_the_first() {
    let corpus = common::PANGRAM.repeat(5);
    let result = optimizer(&corpus, options(40, 60, 3)).run(&SilentProgress);
    assert!(result.fitness >= result.history[0]);
    assert!(result.fitness > 0.0);
    assert!(LayoutTemplate::qwerty().conforms(&result.layout));
}

#[test]
fn empty_corpus_completes_with_zero_fitness() {
    let result = optimizer("", options(3, 5, 1)).run(&SilentProgress);
    assert_eq!(result.fitness, 0.0);
    assert_eq!(result.generations_run, 3);
    assert!(LayoutTemplate::qwerty().conforms(&result.layout));
}

#[test]
fn progress_reports_every_fifth_generation_and_the_last() {
    let seen = Mutex::new(Vec::new());
    let callback = |msg: &str, pct: Option<f32>| {
        seen.lock().unwrap().push((msg.to_string(), pct));
        true
    };
    optimizer(common::PANGRAM, options(12, 6, 1)).run(&callback);

    let seen = seen.into_inner().unwrap();
    let generations: Vec<&str> = seen
        .iter()
        .filter(|(m, _)| m.starts_with("Generation"))
        .map(|(m, _)| m.split(':').next().unwrap())
        .collect();
    assert_eq!(
        generations,
        vec!["Generation 1/12", "Generation 6/12", "Generation 11/12", "Generation 12/12"]
    );
    let last_pct = seen.last().and_then(|(_, p)| *p).unwrap();
    assert!((last_pct - 95.0).abs() < 1e-4);
}

#[test]
fn returning_false_cancels_the_run() {
    let reports = AtomicUsize::new(0);
    let callback = |msg: &str, _pct: Option<f32>| {
        if msg.starts_with("Generation") {
            return reports.fetch_add(1, Ordering::SeqCst) < 1;
        }
        true
    };
    let result = optimizer(common::PANGRAM, options(50, 10, 1)).run(&callback);
    assert!(result.cancelled);
    // Reports after generations 1 and 6; the second one stops the run.
    assert_eq!(result.generations_run, 6);
    assert!(LayoutTemplate::qwerty().conforms(&result.layout));
}

#[test]
fn rejects_invalid_options() {
    let scorer = Arc::new(Scorer::from_corpus("ab", FitnessWeights::default()));
    for bad in [options(0, 10, 1), options(10, 0, 0), options(10, 4, 5)] {
        assert!(Optimizer::new(scorer.clone(), LayoutTemplate::qwerty(), bad).is_err());
    }
    let bad_rate = OptimizationOptions {
        mutation_rate: 1.5,
        ..Default::default()
    };
    assert!(Optimizer::new(scorer, LayoutTemplate::qwerty(), bad_rate).is_err());
}
