//! # Association Rule Generation
//!
//! Derives `antecedent => consequent` rules from a mined itemset
//! collection. Antecedent supports are looked up from that collection, never
//! recomputed from raw transactions: by anti-monotonicity every subset of a
//! frequent itemset is itself frequent, so a missing lookup is an internal
//! invariant violation and fails the run.

/**
 * File: /src/rules.rs
 * Created Date: Thursday, February 5th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 5th February 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-02-05		Zihan	Created rule generation over mined itemsets
 */

use std::collections::HashMap;

use log::debug;

use crate::types::{AssociationRule, FrequentItemset, Item, MiningError};

/// Generate all rules meeting `min_confidence` from a mined itemset
/// collection.
///
/// For every itemset of size >= 2, every non-empty proper subset is tried
/// as an antecedent via bitmask enumeration; mined itemsets are small, so
/// the per-set cost stays bounded. Confidence is
/// `support(itemset) / support(antecedent)`.
pub fn generate_rules<I: Item>(
    itemsets: &[FrequentItemset<I>],
    min_confidence: f64,
) -> Result<Vec<AssociationRule<I>>, MiningError> {
    if !(min_confidence > 0.0 && min_confidence <= 1.0) {
        return Err(MiningError::InvalidConfidence(min_confidence));
    }

    // itemset vectors are sorted, so a sorted slice is a canonical key
    let mut support_index: HashMap<&[I], u64> = HashMap::with_capacity(itemsets.len());
    for set in itemsets {
        support_index.insert(set.items.as_slice(), set.support);
    }

    let mut rules = Vec::new();
    for set in itemsets.iter().filter(|set| set.len() >= 2) {
        let k = set.items.len();

        for mask in 1..((1u64 << k) - 1) {
            let mut antecedent = Vec::new();
            let mut consequent = Vec::new();
            for (i, item) in set.items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    antecedent.push(item.clone());
                } else {
                    consequent.push(item.clone());
                }
            }

            let antecedent_support = support_index
                .get(antecedent.as_slice())
                .copied()
                .ok_or_else(|| MiningError::MissingSubsetSupport(format!("{:?}", antecedent)))?;

            let confidence = set.support as f64 / antecedent_support as f64;
            if confidence >= min_confidence {
                rules.push(AssociationRule {
                    antecedent,
                    consequent,
                    confidence,
                    support: set.support,
                });
            }
        }
    }

    debug!(
        "generated {} rules from {} itemsets at min confidence {}",
        rules.len(),
        itemsets.len(),
        min_confidence
    );
    Ok(rules)
}
