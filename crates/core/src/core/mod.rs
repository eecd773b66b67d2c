//! Core BPE data structures.
//!
//! This module contains the symbol representation shared by training and
//! encoding, the ordered merge rule table, and the ordering used to pick
//! the next merge during training.

pub mod merges;
pub mod priority;
pub mod symbol;

pub use merges::MergeRules;
pub use priority::MergeCandidate;
pub use symbol::{merge_pair, representation, word_symbols, Pair, Symbol, END_OF_WORD};
