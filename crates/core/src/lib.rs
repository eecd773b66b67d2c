//! Subword-core - Core word-level BPE data structures
//!
//! This crate provides the pieces shared by training and encoding:
//! symbols and the end-of-word sentinel, the ordered merge rule table,
//! and the error type.
//!
//! # Example
//!
//! ```rust
//! use subword_core::{merge_pair, representation, word_symbols, MergeRules};
//!
//! let mut rules = MergeRules::new();
//! rules.push("l", "o")?;
//!
//! let mut symbols = word_symbols("low");
//! merge_pair(&mut symbols, "l", "o");
//! assert_eq!(representation(&symbols), "lo w </w>");
//! # Ok::<(), subword_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use core::{
    merge_pair, representation, word_symbols, MergeCandidate, MergeRules, Pair, Symbol,
    END_OF_WORD,
};
