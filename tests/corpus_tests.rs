use proptest::prelude::*;
use typeforge::corpus::count_bigrams;

#[test]
fn pangram_bigrams() {
    let counts = count_bigrams("The quick brown fox");
    // the, quick, brown, fox -> 2 + 4 + 4 + 2
    assert_eq!(counts.total(), 12);
    assert_eq!(counts.get('t', 'h'), 1);
    assert_eq!(counts.get('e', 'q'), 0, "pairs across spaces are skipped");
}

#[test]
fn digits_count_as_alphanumeric() {
    let counts = count_bigrams("a1b2");
    assert_eq!(counts.get('a', '1'), 1);
    assert_eq!(counts.get('1', 'b'), 1);
    assert_eq!(counts.get('b', '2'), 1);
}

#[test]
fn empty_and_single_char_corpora() {
    assert!(count_bigrams("").is_empty());
    assert!(count_bigrams("a").is_empty());
    assert!(count_bigrams("!?.,").is_empty());
}

proptest! {
    #[test]
    fn prop_counting_is_idempotent(corpus in ".{0,200}") {
        prop_assert_eq!(count_bigrams(&corpus), count_bigrams(&corpus));
    }

    #[test]
    fn prop_total_bounded_by_windows(corpus in "[a-z ]{0,200}") {
        let counts = count_bigrams(&corpus);
        prop_assert!(counts.total() as usize <= corpus.len().saturating_sub(1));
    }
}
