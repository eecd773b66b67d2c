//! Merge rule management for BPE.
//!
//! Merge rules are kept in the order they were learned. That order is the
//! priority used during encoding: a rule's rank is its index, and a lower
//! rank is applied first. A two-level hash index (left symbol, then right
//! symbol) gives the rank of a pair from borrowed `&str` keys.

use super::symbol::{Pair, Symbol};
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Ordered collection of BPE merge rules with rank lookup.
///
/// Serializes as an ordered list of `[left, right]` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pair>", into = "Vec<Pair>")]
pub struct MergeRules {
    /// Rules in learned order; the index is the rank
    rules: Vec<Pair>,
    /// Left -> right -> rank
    ranks: AHashMap<Symbol, AHashMap<Symbol, u32>>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            ranks: AHashMap::new(),
        }
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            ranks: AHashMap::with_capacity(capacity),
        }
    }

    /// Append a merge rule with the next (lowest) priority.
    ///
    /// Returns the rank assigned to the rule. Empty symbols are rejected.
    /// A pair that is already present keeps its earlier rank for lookups;
    /// training can learn the same pair twice when a later merge rebuilds
    /// an already merged symbol.
    pub fn push(&mut self, left: &str, right: &str) -> Result<u32> {
        if left.is_empty() || right.is_empty() {
            return Err(TokenizerError::InvalidMerge(format!(
                "empty symbol in pair ({:?}, {:?})",
                left, right
            )));
        }

        let rank = u32::try_from(self.rules.len()).map_err(|_| {
            TokenizerError::InvalidMerge(format!("too many merge rules ({})", self.rules.len()))
        })?;
        let pair: Pair = (Symbol::new(left), Symbol::new(right));
        self.ranks
            .entry(pair.0.clone())
            .or_default()
            .entry(pair.1.clone())
            .or_insert(rank);
        self.rules.push(pair);

        Ok(rank)
    }

    /// Get the rank of the rule merging `left` and `right`, if any.
    #[inline]
    pub fn rank(&self, left: &str, right: &str) -> Option<u32> {
        self.ranks.get(left)?.get(right).copied()
    }

    /// Get the rule with the given rank.
    #[inline]
    pub fn get(&self, rank: u32) -> Option<&Pair> {
        self.rules.get(rank as usize)
    }

    /// Iterate over the rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.rules.iter()
    }

    /// The symbol produced by each rule, in priority order.
    pub fn merged_symbols(&self) -> Vec<Symbol> {
        self.rules
            .iter()
            .map(|(left, right)| {
                let mut merged = left.clone();
                merged.push_str(right);
                merged
            })
            .collect()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Create merge rules from a list of pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...).
    pub fn from_pairs<L, R>(pairs: impl IntoIterator<Item = (L, R)>) -> Result<Self>
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let mut rules = Self::new();
        for (left, right) in pairs {
            rules.push(left.as_ref(), right.as_ref())?;
        }
        Ok(rules)
    }
}

impl PartialEq for MergeRules {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for MergeRules {}

impl TryFrom<Vec<Pair>> for MergeRules {
    type Error = TokenizerError;

    fn try_from(pairs: Vec<Pair>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<MergeRules> for Vec<Pair> {
    fn from(rules: MergeRules) -> Self {
        rules.rules
    }
}
