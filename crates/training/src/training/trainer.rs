//! BPE trainer implementation.
//!
//! Learns merge rules by repeatedly merging the most frequent adjacent
//! symbol pair across the corpus vocabulary. Pair statistics are recomputed
//! from the vocabulary on every step.

use super::counter::PairCounter;
use log::{debug, info};
use subword_core::{MergeCandidate, MergeRules, Result, TokenizerError};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Maximum number of merge rules to learn
    pub max_merges: usize,
    /// Minimum aggregate frequency for a pair to be merged
    pub min_frequency: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_merges: 1000,
            min_frequency: 1,
        }
    }
}

impl TrainingConfig {
    /// Check that the configuration can drive a training run.
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency == 0 {
            return Err(TokenizerError::InvalidConfig(
                "min_frequency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// BPE trainer.
///
/// Trains merge rules from a corpus of words by iteratively merging the
/// most frequent symbol pair. Ties on frequency go to the lexicographically
/// smallest pair (see [`MergeCandidate`]).
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer learning at most `max_merges` rules.
    pub fn with_max_merges(max_merges: usize) -> Self {
        Self::new(TrainingConfig {
            max_merges,
            ..Default::default()
        })
    }

    /// Train merge rules on a corpus of words.
    ///
    /// # Arguments
    /// * `corpus` - Words without internal whitespace; duplicates add weight
    ///
    /// # Returns
    /// The learned merge rules in the order they were discovered. Training
    /// stops early, without error, once no pair is left or the best pair
    /// falls below `min_frequency`.
    pub fn train<I, S>(&self, corpus: I) -> Result<MergeRules>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.validate()?;

        let mut counter = PairCounter::from_corpus(corpus);
        let mut merges = MergeRules::with_capacity(self.config.max_merges.min(4096));

        while merges.len() < self.config.max_merges {
            let candidate = match Self::best_pair(&counter) {
                Some(c) => c,
                None => {
                    debug!("no pairs left after {} merges", merges.len());
                    break;
                }
            };

            if candidate.count < self.config.min_frequency {
                debug!(
                    "best pair count {} below min_frequency {}",
                    candidate.count, self.config.min_frequency
                );
                break;
            }

            let (left, right) = &candidate.pair;
            let affected = counter.merge_pair_in_words(left, right);
            let rank = merges.push(left, right)?;

            debug!(
                "merge {}: ({:?}, {:?}) count={} merged={}",
                rank, left, right, candidate.count, affected
            );
        }

        info!(
            "learned {} merge rules from {} unique words ({} occurrences)",
            merges.len(),
            counter.word_count(),
            counter.total_word_occurrences()
        );

        Ok(merges)
    }

    /// Pick the pair to merge next, if any pair exists.
    fn best_pair(counter: &PairCounter) -> Option<MergeCandidate> {
        counter
            .count_pairs()
            .into_iter()
            .map(|(pair, count)| MergeCandidate::new(pair, count))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(merges: &MergeRules) -> Vec<(String, String)> {
        merges
            .iter()
            .map(|(l, r)| (l.to_string(), r.to_string()))
            .collect()
    }

    fn pair(left: &str, right: &str) -> (String, String) {
        (left.to_string(), right.to_string())
    }

    #[test]
    fn test_reference_corpus() {
        let trainer = BpeTrainer::with_max_merges(10);
        let merges = trainer.train(["low", "lowest", "newer", "wider"]).unwrap();

        assert_eq!(
            pairs(&merges),
            vec![
                pair("e", "r"),
                pair("er", "</w>"),
                pair("l", "o"),
                pair("lo", "w"),
                pair("d", "er</w>"),
                pair("e", "s"),
                pair("e", "w"),
                pair("es", "t"),
                pair("est", "</w>"),
                pair("ew", "er</w>"),
            ]
        );
    }

    #[test]
    fn test_first_merge_has_max_frequency() {
        let corpus = ["low", "lowest", "newer", "wider"];
        let counts = PairCounter::from_corpus(corpus).count_pairs();
        let max = counts.values().copied().max().unwrap();
        assert_eq!(max, 2);

        let merges = BpeTrainer::with_max_merges(10).train(corpus).unwrap();
        let first = merges.get(0).unwrap();
        assert_eq!(counts.get(first), Some(&max));
    }

    #[test]
    fn test_frequency_beats_order() {
        // (y, z) occurs three times, so it wins over the smaller pair (a, b).
        let merges = BpeTrainer::with_max_merges(1)
            .train(["ab", "yz", "yz", "yz"])
            .unwrap();
        assert_eq!(pairs(&merges), vec![pair("y", "z")]);
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // Every pair occurs exactly once.
        let merges = BpeTrainer::with_max_merges(1).train(["zy", "ab"]).unwrap();
        assert_eq!(pairs(&merges), vec![pair("a", "b")]);

        // The sentinel sorts before letters.
        let merges = BpeTrainer::with_max_merges(1).train(["ba", "ab"]).unwrap();
        assert_eq!(pairs(&merges), vec![pair("a", "</w>")]);
    }

    #[test]
    fn test_stops_when_pairs_exhausted() {
        // "ab" collapses to a single symbol after two merges.
        let merges = BpeTrainer::with_max_merges(50).train(["ab"]).unwrap();
        assert_eq!(pairs(&merges), vec![pair("a", "b"), pair("ab", "</w>")]);
    }

    #[test]
    fn test_zero_merges() {
        let merges = BpeTrainer::with_max_merges(0)
            .train(["low", "lower"])
            .unwrap();
        assert!(merges.is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let merges = BpeTrainer::with_max_merges(10)
            .train(Vec::<String>::new())
            .unwrap();
        assert!(merges.is_empty());
    }

    #[test]
    fn test_min_frequency_filter() {
        let trainer = BpeTrainer::new(TrainingConfig {
            max_merges: 10,
            min_frequency: 2,
        });

        let merges = trainer.train(["low", "lowest", "newer", "wider"]).unwrap();
        // Only the four pairs seen twice survive.
        assert_eq!(merges.len(), 4);
    }

    #[test]
    fn test_zero_min_frequency_rejected() {
        let trainer = BpeTrainer::new(TrainingConfig {
            max_merges: 10,
            min_frequency: 0,
        });

        let err = trainer.train(["low"]).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_deterministic() {
        let corpus = ["the", "then", "there", "other", "hello", "help", "held"];
        let first = BpeTrainer::with_max_merges(20).train(corpus).unwrap();

        for _ in 0..5 {
            let again = BpeTrainer::with_max_merges(20).train(corpus).unwrap();
            assert_eq!(again, first);
        }
    }
}
