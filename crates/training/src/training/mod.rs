//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the training vocabulary with its pair statistics
//! and the greedy merge learner.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{BpeTrainer, TrainingConfig};
