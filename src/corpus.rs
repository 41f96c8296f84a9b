use std::collections::BTreeMap;

/// Occurrence counts of adjacent alphanumeric character pairs in a corpus.
///
/// Ordered so that every traversal (and therefore every floating-point sum
/// built from one) is identical between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigramCounts {
    counts: BTreeMap<[char; 2], u64>,
}

impl BigramCounts {
    pub fn get(&self, a: char, b: char) -> u64 {
        self.counts.get(&[a, b]).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = ([char; 2], u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Most frequent bigrams, ties broken by bigram order.
    pub fn top(&self, n: usize) -> Vec<([char; 2], u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<([char; 2], u64)> for BigramCounts {
    fn from_iter<I: IntoIterator<Item = ([char; 2], u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (k, v) in iter {
            *counts.entry(k).or_insert(0) += v;
        }
        Self { counts }
    }
}

/// Counts every adjacent pair of the lower-cased corpus where both
/// characters are alphanumeric. Pairs overlap: "abc" yields "ab" and "bc".
pub fn count_bigrams(corpus: &str) -> BigramCounts {
    let lowered: Vec<char> = corpus.to_lowercase().chars().collect();
    let mut counts = BTreeMap::new();

    for pair in lowered.windows(2) {
        if pair[0].is_alphanumeric() && pair[1].is_alphanumeric() {
            *counts.entry([pair[0], pair[1]]).or_insert(0) += 1;
        }
    }

    BigramCounts { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_overlapping_pairs() {
        let counts = count_bigrams("abab");
        assert_eq!(counts.get('a', 'b'), 2);
        assert_eq!(counts.get('b', 'a'), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn skips_pairs_spanning_non_alphanumerics() {
        let counts = count_bigrams("a b-c");
        assert!(counts.is_empty());
    }

    #[test]
    fn lowercases_before_counting() {
        let counts = count_bigrams("The THE");
        assert_eq!(counts.get('t', 'h'), 2);
        assert_eq!(counts.get('h', 'e'), 2);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn top_orders_by_count() {
        let counts = count_bigrams("ththth ab");
        let top = counts.top(2);
        assert_eq!(top[0], (['t', 'h'], 3));
        assert_eq!(top[1], (['h', 't'], 2));
        assert_eq!(counts.get('a', 'b'), 1);
    }
}
