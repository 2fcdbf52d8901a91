//! # FP-Growth Data Structures
//!
//! Core data structures shared by the mining pipeline: item bounds,
//! frequent itemsets, association rules, configuration and error types.

/**
 * File: /src/types.rs
 * Created Date: Monday, February 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 2nd February 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-02-02		Zihan	Created data structures for FP-growth mining
 */

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::hash::Hash;

/// Bound for transaction items.
///
/// Any hashable, totally ordered, cloneable type qualifies (strings,
/// integers, interned ids). The `Ord` bound doubles as the deterministic
/// tie-break between items of equal frequency, so two runs over the same
/// input always build identical trees.
pub trait Item: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Item for T {}

/// A mined frequent itemset together with its absolute support count.
///
/// Items are kept sorted so that equal itemsets compare equal regardless of
/// the order in which the miner assembled them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequentItemset<I: Item> {
    /// The items, in ascending `Ord` order
    pub items: Vec<I>,
    /// Number of transactions containing every item of the set
    pub support: u64,
}

impl<I: Item> FrequentItemset<I> {
    /// Build an itemset from items in arbitrary order.
    pub fn new(mut items: Vec<I>, support: u64) -> Self {
        items.sort_unstable();
        Self { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An association rule `antecedent => consequent` derived from a frequent
/// itemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule<I: Item> {
    /// Left-hand side, ascending `Ord` order
    pub antecedent: Vec<I>,
    /// Right-hand side, ascending `Ord` order
    pub consequent: Vec<I>,
    /// support(antecedent ∪ consequent) / support(antecedent)
    pub confidence: f64,
    /// Absolute support of the full itemset
    pub support: u64,
}

/// Configuration for a mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum support as a fraction of the transaction count, in (0, 1]
    pub min_support: f64,
    /// Minimum rule confidence in (0, 1]; `None` disables rule generation
    pub min_confidence: Option<f64>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: None,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            min_confidence: None,
        }
    }

    /// Enable rule generation at the given minimum confidence.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    /// Check that both thresholds lie in (0, 1]. NaN fails both checks.
    pub fn validate(&self) -> Result<(), MiningError> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::InvalidSupport(self.min_support));
        }
        if let Some(c) = self.min_confidence {
            if !(c > 0.0 && c <= 1.0) {
                return Err(MiningError::InvalidConfidence(c));
            }
        }
        Ok(())
    }
}

/// Result of a mining run: the itemset collection plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningResult<I: Item> {
    /// All itemsets whose support meets the threshold
    pub itemsets: Vec<FrequentItemset<I>>,
    /// Association rules, present when a minimum confidence was configured
    pub rules: Option<Vec<AssociationRule<I>>>,
    /// Size of the input dataset
    pub num_transactions: usize,
    /// Absolute support count derived from the fractional threshold
    pub min_support_count: u64,
}

impl<I: Item> MiningResult<I> {
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Look up the support of an itemset, given in any item order.
    pub fn support_of(&self, items: &[I]) -> Option<u64> {
        let mut key: Vec<I> = items.to_vec();
        key.sort_unstable();
        self.itemsets
            .iter()
            .find(|set| set.items == key)
            .map(|set| set.support)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors from the mining pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum MiningError {
    /// Support fraction outside (0, 1]
    InvalidSupport(f64),
    /// Rule confidence outside (0, 1]
    InvalidConfidence(f64),
    /// A subset of a frequent itemset was absent from the mined collection;
    /// anti-monotonicity guarantees this cannot happen for a sound input
    MissingSubsetSupport(String),
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MiningError::InvalidSupport(s) => {
                write!(f, "Invalid minimum support {} (must be in (0, 1])", s)
            }
            MiningError::InvalidConfidence(c) => {
                write!(f, "Invalid minimum confidence {} (must be in (0, 1])", c)
            }
            MiningError::MissingSubsetSupport(subset) => {
                write!(
                    f,
                    "Support lookup failed for subset {} of a frequent itemset",
                    subset
                )
            }
        }
    }
}

impl Error for MiningError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_sorts_items() {
        let set = FrequentItemset::new(vec!["milk", "bread"], 3);
        assert_eq!(set.items, vec!["bread", "milk"]);
        assert_eq!(set.support, 3);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_itemset_equality_ignores_input_order() {
        let a = FrequentItemset::new(vec![2u32, 1, 3], 5);
        let b = FrequentItemset::new(vec![3u32, 2, 1], 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_default() {
        let config = MinerConfig::default();
        assert_eq!(config.min_support, 0.01);
        assert!(config.min_confidence.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_support_bounds() {
        assert!(MinerConfig::new(1.0).validate().is_ok());
        assert!(MinerConfig::new(0.0).validate().is_err());
        assert!(MinerConfig::new(-0.5).validate().is_err());
        assert!(MinerConfig::new(1.5).validate().is_err());
        assert!(MinerConfig::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_config_validate_confidence_bounds() {
        let ok = MinerConfig::new(0.5).with_min_confidence(0.7);
        assert!(ok.validate().is_ok());

        let bad = MinerConfig::new(0.5).with_min_confidence(0.0);
        match bad.validate() {
            Err(MiningError::InvalidConfidence(c)) => assert_eq!(c, 0.0),
            other => panic!("Expected InvalidConfidence, got {:?}", other),
        }
    }

    #[test]
    fn test_result_support_lookup() {
        let result = MiningResult {
            itemsets: vec![
                FrequentItemset::new(vec!["bread"], 4),
                FrequentItemset::new(vec!["milk", "bread"], 3),
            ],
            rules: None,
            num_transactions: 5,
            min_support_count: 2,
        };

        assert_eq!(result.support_of(&["bread"]), Some(4));
        assert_eq!(result.support_of(&["bread", "milk"]), Some(3));
        assert_eq!(result.support_of(&["milk", "bread"]), Some(3));
        assert_eq!(result.support_of(&["beer"]), None);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let error = MiningError::InvalidSupport(1.5);
        let error_str = format!("{}", error);
        assert!(error_str.contains("1.5"));
        assert!(error_str.contains("support"));

        let error = MiningError::MissingSubsetSupport("[\"beer\"]".to_string());
        let error_str = format!("{}", error);
        assert!(error_str.contains("beer"));
    }
}
