//! Ordering of merge candidates during BPE training.
//!
//! Training merges the most frequent pair at each step. Ties are broken by
//! the pair text itself so the outcome never depends on hash-map iteration
//! order: among equal counts the lexicographically smallest `(left, right)`
//! pair wins, comparing `left` first.

use super::symbol::Pair;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of symbols to merge
    pub pair: Pair,
    /// The aggregate frequency of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// The greatest candidate is the one to merge next.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn candidate(left: &str, right: &str, count: u64) -> MergeCandidate {
        MergeCandidate::new((CompactString::new(left), CompactString::new(right)), count)
    }

    #[test]
    fn test_higher_count_wins() {
        assert!(candidate("z", "z", 3) > candidate("a", "a", 2));
    }

    #[test]
    fn test_tie_prefers_smaller_pair() {
        assert!(candidate("e", "r", 2) > candidate("l", "o", 2));
        assert!(candidate("a", "b", 1) > candidate("a", "c", 1));
        // '<' sorts before ASCII letters.
        assert!(candidate("a", "</w>", 1) > candidate("a", "b", 1));
    }

    #[test]
    fn test_max_is_independent_of_input_order() {
        let forward = vec![
            candidate("w", "e", 2),
            candidate("l", "o", 2),
            candidate("e", "r", 2),
            candidate("a", "b", 1),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let best_forward = forward.into_iter().max().unwrap();
        let best_backward = backward.into_iter().max().unwrap();
        assert_eq!(best_forward, best_backward);
        assert_eq!(best_forward.pair.0.as_str(), "e");
    }
}
