//! Main BPE engine implementation.
//!
//! This module provides the `Bpe` struct that owns the learned merge rules
//! and exposes training (`fit`), encoding and decoding.

use log::debug;
use subword_core::{
    merge_pair, word_symbols, MergeRules, Pair, Result, Symbol, END_OF_WORD,
};
use subword_training::{BpeTrainer, TrainingConfig};

/// Builder for creating a BPE engine.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TrainingConfig,
}

impl TokenizerBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: TrainingConfig::default(),
        }
    }

    /// Set the maximum number of merge rules `fit` may learn.
    pub fn max_merges(mut self, max_merges: usize) -> Self {
        self.config.max_merges = max_merges;
        self
    }

    /// Set the minimum pair frequency for a merge during `fit`.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<Bpe> {
        self.config.validate()?;
        Ok(Bpe {
            config: self.config,
            merges: MergeRules::new(),
        })
    }
}

/// Word-level BPE engine.
///
/// The ordered merge rules are the only state. `fit` appends to them;
/// `encode` and `decode` only read them, so a fitted engine can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Bpe {
    /// Training configuration
    config: TrainingConfig,
    /// Learned merge rules, in priority order
    merges: MergeRules,
}

impl Bpe {
    /// Create an engine that learns at most `max_merges` rules.
    pub fn new(max_merges: usize) -> Self {
        Self {
            config: TrainingConfig {
                max_merges,
                ..Default::default()
            },
            merges: MergeRules::new(),
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create an engine from previously learned rules, in priority order.
    pub fn from_merges<L, R>(pairs: impl IntoIterator<Item = (L, R)>) -> Result<Self>
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        Ok(Self::with_merges(MergeRules::from_pairs(pairs)?))
    }

    /// Create an engine around an existing rule table.
    pub fn with_merges(merges: MergeRules) -> Self {
        Self {
            config: TrainingConfig {
                max_merges: merges.len(),
                ..Default::default()
            },
            merges,
        }
    }

    /// Learn merge rules from a corpus of words.
    ///
    /// Newly learned rules are appended after any existing ones, at most
    /// `max_merges` per call, so earlier rules keep their priority. On error
    /// the existing rules are left untouched.
    pub fn fit<I, S>(&mut self, corpus: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trainer = BpeTrainer::new(self.config.clone());
        let learned = trainer.train(corpus)?;

        if !self.merges.is_empty() {
            debug!(
                "appending {} rules to {} existing rules",
                learned.len(),
                self.merges.len()
            );
        }

        for (left, right) in learned.iter() {
            self.merges.push(left, right)?;
        }

        Ok(())
    }

    /// Encode whitespace-separated text, one token list per word.
    ///
    /// Leading and trailing whitespace is ignored and runs of whitespace act
    /// as a single delimiter.
    pub fn encode(&self, text: &str) -> Vec<Vec<String>> {
        text.split_whitespace()
            .map(|word| self.encode_word(word))
            .collect()
    }

    /// Encode a single word into subword tokens.
    ///
    /// At each step the adjacent pair with the earliest learned rule is
    /// merged everywhere in the word, left to right. A standalone trailing
    /// sentinel is dropped; one merged into a larger token (`er</w>`) stays.
    pub fn encode_word(&self, word: &str) -> Vec<String> {
        let mut symbols = word_symbols(word);

        while let Some((left, right)) = self.best_rule(&symbols) {
            merge_pair(&mut symbols, &left, &right);
        }

        if symbols.last().map(|s| s.as_str()) == Some(END_OF_WORD) {
            symbols.pop();
        }

        symbols.into_iter().map(|s| s.to_string()).collect()
    }

    /// Decode encoded words back to their text.
    pub fn decode<W, S>(&self, encoded: &[W]) -> Vec<String>
    where
        W: AsRef<[S]>,
        S: AsRef<str>,
    {
        encoded
            .iter()
            .map(|tokens| Self::decode_word(tokens.as_ref()))
            .collect()
    }

    /// Concatenate tokens and strip one trailing end-of-word sentinel.
    pub fn decode_word<S: AsRef<str>>(tokens: &[S]) -> String {
        let mut word: String = tokens.iter().map(|t| t.as_ref()).collect();
        if word.ends_with(END_OF_WORD) {
            word.truncate(word.len() - END_OF_WORD.len());
        }
        word
    }

    /// Get the learned merge rules.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// The symbol created by each learned rule, in priority order.
    pub fn learned_symbols(&self) -> Vec<Symbol> {
        self.merges.merged_symbols()
    }

    /// Get the maximum number of rules `fit` may learn.
    pub fn max_merges(&self) -> usize {
        self.config.max_merges
    }

    /// The highest-priority rule matching any adjacent pair in `symbols`.
    fn best_rule(&self, symbols: &[Symbol]) -> Option<Pair> {
        symbols
            .windows(2)
            .filter_map(|w| self.merges.rank(&w[0], &w[1]))
            .min()
            .and_then(|rank| self.merges.get(rank).cloned())
    }
}
