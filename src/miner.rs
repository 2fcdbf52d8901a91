//! # FP-Growth Pattern Miner
//!
//! Depth-first conditional pattern growth over an FP-tree.
//!
//! ## Algorithm Overview
//!
//! 1. **Count**: one pass over the transactions; items below the absolute
//!    support count are discarded.
//! 2. **Build**: each transaction is filtered and sorted into the global
//!    frequency order and inserted into the root tree.
//! 3. **Mine**: header items are peeled least-frequent-first; each item is
//!    emitted with the current suffix, its conditional pattern base is
//!    re-counted and re-ordered locally, and mining recurses into the
//!    conditional tree. Trees that collapse to a single chain short-cut to
//!    direct subset enumeration.
//!
//! The absolute support count derived from the fractional threshold at the
//! root is carried unchanged through every conditional level.

/**
 * File: /src/miner.rs
 * Created Date: Wednesday, February 4th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 4th February 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-02-04		Zihan	Created recursive pattern growth with single-path shortcut
 */

use log::{debug, info};

use crate::counting::FrequencyTable;
use crate::rules::generate_rules;
use crate::tree::FPTree;
use crate::types::{FrequentItemset, Item, MinerConfig, MiningError, MiningResult};

/// Frequent-itemset miner over in-memory transaction collections.
///
/// ```
/// use fast_fpgrowth::FPGrowthMiner;
///
/// let transactions = vec![
///     vec!["bread", "milk"],
///     vec!["bread", "diaper", "beer", "eggs"],
///     vec!["milk", "diaper", "beer", "cola"],
///     vec!["bread", "milk", "diaper", "beer"],
///     vec!["bread", "milk", "diaper", "cola"],
/// ];
///
/// let result = FPGrowthMiner::new(0.4).mine(&transactions).unwrap();
/// assert_eq!(result.len(), 17);
/// assert_eq!(result.support_of(&["diaper", "beer"]), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FPGrowthMiner {
    config: MinerConfig,
}

impl FPGrowthMiner {
    /// Miner with the given minimum support fraction and no rule generation.
    pub fn new(min_support: f64) -> Self {
        Self {
            config: MinerConfig::new(min_support),
        }
    }

    pub fn with_config(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mine all frequent itemsets; duplicates within a transaction collapse
    /// to one occurrence. When the configuration carries a minimum
    /// confidence, association rules are generated and attached.
    ///
    /// An empty transaction collection yields an empty result.
    pub fn mine<I: Item>(&self, transactions: &[Vec<I>]) -> Result<MiningResult<I>, MiningError> {
        self.config.validate()?;

        let num_transactions = transactions.len();
        let min_count = ((self.config.min_support * num_transactions as f64).floor() as u64).max(1);
        info!(
            "mining {} transactions, min support {} (>= {} transactions)",
            num_transactions, self.config.min_support, min_count
        );

        let mut itemsets = Vec::new();
        if num_transactions > 0 {
            let table = FrequencyTable::from_transactions(transactions, min_count);
            debug!("{} items survive the support threshold", table.len());

            if !table.is_empty() {
                let mut tree = FPTree::new();
                for transaction in transactions {
                    let items = table.sort_and_filter(transaction);
                    if !items.is_empty() {
                        tree.insert(&items, 1);
                    }
                }
                debug!("root tree holds {} nodes", tree.node_count());

                mine_tree(&tree, &[], min_count, &mut itemsets);
            }
        }
        info!("found {} frequent itemsets", itemsets.len());

        let rules = match self.config.min_confidence {
            Some(min_confidence) => Some(generate_rules(&itemsets, min_confidence)?),
            None => None,
        };

        Ok(MiningResult {
            itemsets,
            rules,
            num_transactions,
            min_support_count: min_count,
        })
    }
}

/// Recursive pattern growth. Every itemset emitted is `suffix` extended by
/// items of `tree`; the tree only contains items meeting `min_count`.
fn mine_tree<I: Item>(
    tree: &FPTree<I>,
    suffix: &[I],
    min_count: u64,
    out: &mut Vec<FrequentItemset<I>>,
) {
    // a chain has no branching left to explore; enumerate it directly
    if let Some(path) = tree.single_path() {
        emit_path_subsets(&path, suffix, out);
        return;
    }

    // peel header items bottom-up: ascending support, descending item on
    // ties (any fixed order is valid, the closure mined is the same)
    let mut items: Vec<(I, u64)> = tree
        .items()
        .map(|item| (item.clone(), tree.support(item)))
        .collect();
    items.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));

    for (item, support) in items {
        let mut found = suffix.to_vec();
        found.push(item.clone());
        out.push(FrequentItemset::new(found.clone(), support));

        let base = tree.pattern_base(&item);
        if base.is_empty() {
            continue;
        }

        // local re-count and re-order against the same absolute threshold
        let table = FrequencyTable::from_pattern_base(&base, min_count);
        if table.is_empty() {
            continue;
        }

        let mut conditional = FPTree::new();
        for (path, weight) in &base {
            let filtered = table.sort_and_filter(path);
            if !filtered.is_empty() {
                conditional.insert(&filtered, *weight);
            }
        }

        if !conditional.is_empty() {
            debug!(
                "conditional tree for {:?}: {} nodes, {} items",
                item,
                conditional.node_count(),
                table.len()
            );
            mine_tree(&conditional, &found, min_count, out);
        }
    }
}

/// Emit every non-empty subset of a single-path tree joined with the
/// suffix. A subset's support is the minimum node count over the covered
/// portion of the path.
fn emit_path_subsets<I: Item>(
    path: &[(I, u64)],
    suffix: &[I],
    out: &mut Vec<FrequentItemset<I>>,
) {
    let mut subsets: Vec<(Vec<I>, u64)> = Vec::new();

    for (item, count) in path {
        let mut extended = Vec::with_capacity(subsets.len() + 1);
        extended.push((vec![item.clone()], *count));

        for (items, support) in &subsets {
            let mut with_item = items.clone();
            with_item.push(item.clone());
            extended.push((with_item, (*support).min(*count)));
        }

        for (items, support) in &extended {
            let mut full = suffix.to_vec();
            full.extend(items.iter().cloned());
            out.push(FrequentItemset::new(full, *support));
        }
        subsets.extend(extended);
    }
}
