//! Subword-tokenizer - Word-level BPE engine
//!
//! This crate ties training and encoding together behind a single `Bpe`
//! engine: learn merge rules from a corpus, then split words into subword
//! tokens and join them back.
//!
//! # Example
//!
//! ```rust
//! use subword_tokenizer::Bpe;
//!
//! let mut bpe = Bpe::new(10);
//! bpe.fit(["low", "lowest", "newer", "wider"])?;
//!
//! let encoded = bpe.encode("lowest newer");
//! assert_eq!(encoded[0], ["low", "est</w>"]);
//!
//! let decoded = bpe.decode(&encoded);
//! assert_eq!(decoded.join(" "), "lowest newer");
//! # Ok::<(), subword_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subword_core::{MergeRules, Result, TokenizerError, END_OF_WORD};
pub use subword_training::TrainingConfig;

// Engine API
pub mod tokenizer;
pub use tokenizer::{Bpe, TokenizerBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
