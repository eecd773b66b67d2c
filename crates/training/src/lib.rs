//! Subword-training - BPE merge rule learning
//!
//! This crate learns an ordered list of BPE merge rules from a corpus of
//! words.
//!
//! # Features
//!
//! - Frequency-weighted pair counting over a deduplicated word vocabulary
//! - Deterministic tie-breaking on equal pair counts
//! - Early stop when no pair is left or pairs fall below `min_frequency`
//!
//! # Example
//!
//! ```rust
//! use subword_training::BpeTrainer;
//!
//! let trainer = BpeTrainer::with_max_merges(10);
//! let merges = trainer.train(["low", "lowest", "newer", "wider"])?;
//! assert_eq!(merges.rank("e", "r"), Some(0));
//! # Ok::<(), subword_training::TokenizerError>(())
//! ```

pub use subword_core::{MergeRules, Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, PairCounter, TrainingConfig};
