//! Training vocabulary and pair counting.
//!
//! The vocabulary maps each distinct corpus word to its current symbol
//! sequence and its occurrence count. It lives for one training run and is
//! rewritten in place after every merge.

use ahash::AHashMap;
use compact_str::CompactString;
use subword_core::{merge_pair, representation, word_symbols, Pair, Symbol};

/// Counter for BPE pair frequencies over a word vocabulary.
pub struct PairCounter {
    /// Word -> current symbol sequence
    words: Vec<Vec<Symbol>>,
    /// Word -> frequency count
    word_counts: Vec<u64>,
    /// Original word text -> position in `words`
    index: AHashMap<CompactString, usize>,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            word_counts: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Build a counter from a corpus of words.
    pub fn from_corpus<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = Self::new();
        for word in corpus {
            counter.add_word(word.as_ref());
        }
        counter
    }

    /// Add a single word occurrence.
    ///
    /// Identical words (exact, case-sensitive match) share one entry and
    /// accumulate its count.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.word_counts[pos] += 1;
            return;
        }

        self.index.insert(CompactString::new(word), self.words.len());
        self.words.push(word_symbols(word));
        self.word_counts.push(1);
    }

    /// Count all adjacent pairs, weighting each by its word's frequency.
    pub fn count_pairs(&self) -> AHashMap<Pair, u64> {
        let mut pair_counts: AHashMap<Pair, u64> = AHashMap::new();

        for (word, &count) in self.words.iter().zip(self.word_counts.iter()) {
            for window in word.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *pair_counts.entry(pair).or_insert(0) += count;
            }
        }

        pair_counts
    }

    /// Merge a pair in all words (mutates words in place).
    ///
    /// Returns the number of word occurrences affected, i.e. the merges
    /// weighted by word frequency.
    pub fn merge_pair_in_words(&mut self, left: &str, right: &str) -> u64 {
        let mut affected = 0;

        for (word, &count) in self.words.iter_mut().zip(self.word_counts.iter()) {
            let merged = merge_pair(word, left, right) as u64;
            affected += merged * count;
        }

        affected
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.word_counts.iter().sum()
    }

    /// Space-joined representation and count of every entry, in insertion order.
    pub fn entries(&self) -> Vec<(String, u64)> {
        self.words
            .iter()
            .zip(self.word_counts.iter())
            .map(|(word, &count)| (representation(word), count))
            .collect()
    }
}

impl Default for PairCounter {
    fn default() -> Self {
        Self::new()
    }
}
