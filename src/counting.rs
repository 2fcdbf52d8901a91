//! # Item Frequency Counting and Ordering
//!
//! One `FrequencyTable` is built per tree level: from the raw transactions
//! for the root tree, or from a weighted conditional pattern base at each
//! recursive level. The table prunes infrequent items and fixes the total
//! item order used for every insertion into that level's tree.

/**
 * File: /src/counting.rs
 * Created Date: Monday, February 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 2nd February 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-02-02		Zihan	Created per-level frequency counting and item ordering
 */

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::types::Item;

/// Per-level item frequency table, pruned to items meeting the absolute
/// support threshold.
///
/// The ordering it derives is total and deterministic: descending count,
/// ties broken by ascending item identity. It is recomputed from scratch at
/// every conditional level and never inherited from the parent level.
#[derive(Debug, Clone)]
pub struct FrequencyTable<I: Item> {
    counts: HashMap<I, u64>,
}

impl<I: Item> FrequencyTable<I> {
    /// Count items over raw transactions, one occurrence per transaction.
    ///
    /// Duplicate items within a single transaction collapse to one
    /// occurrence before counting.
    pub fn from_transactions(transactions: &[Vec<I>], min_count: u64) -> Self {
        let mut counts: HashMap<I, u64> = HashMap::new();
        let mut seen: HashSet<&I> = HashSet::new();

        for transaction in transactions {
            seen.clear();
            for item in transaction {
                if seen.insert(item) {
                    *counts.entry(item.clone()).or_insert(0) += 1;
                }
            }
        }

        counts.retain(|_, count| *count >= min_count);
        Self { counts }
    }

    /// Count items over a conditional pattern base, each path weighted by
    /// its count. Paths are tree paths and therefore duplicate-free.
    pub fn from_pattern_base(base: &[(Vec<I>, u64)], min_count: u64) -> Self {
        let mut counts: HashMap<I, u64> = HashMap::new();

        for (path, weight) in base {
            for item in path {
                *counts.entry(item.clone()).or_insert(0) += weight;
            }
        }

        counts.retain(|_, count| *count >= min_count);
        Self { counts }
    }

    pub fn support(&self, item: &I) -> Option<u64> {
        self.counts.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Compare two surviving items in tree-insertion order.
    fn rank(&self, a: &I, b: &I) -> Ordering {
        let ca = self.counts[b].cmp(&self.counts[a]);
        ca.then_with(|| a.cmp(b))
    }

    /// Surviving items sorted by descending count, ascending item on ties.
    pub fn ordered_items(&self) -> Vec<I> {
        let mut items: Vec<I> = self.counts.keys().cloned().collect();
        items.sort_unstable_by(|a, b| self.rank(a, b));
        items
    }

    /// Project a transaction (or prefix path) onto the surviving items, in
    /// tree-insertion order, duplicates collapsed.
    pub fn sort_and_filter(&self, items: &[I]) -> Vec<I> {
        let mut kept: Vec<I> = items
            .iter()
            .filter(|item| self.counts.contains_key(*item))
            .cloned()
            .collect();
        kept.sort_unstable_by(|a, b| self.rank(a, b));
        // equal items are adjacent after the sort
        kept.dedup();
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Vec<&'static str>> {
        vec![
            vec!["bread", "milk"],
            vec!["bread", "diaper", "beer", "eggs"],
            vec!["milk", "diaper", "beer", "cola"],
            vec!["bread", "milk", "diaper", "beer"],
            vec!["bread", "milk", "diaper", "cola"],
        ]
    }

    #[test]
    fn test_counts_and_pruning() {
        let table = FrequencyTable::from_transactions(&dataset(), 2);

        assert_eq!(table.support(&"bread"), Some(4));
        assert_eq!(table.support(&"milk"), Some(4));
        assert_eq!(table.support(&"diaper"), Some(4));
        assert_eq!(table.support(&"beer"), Some(3));
        assert_eq!(table.support(&"cola"), Some(2));
        // eggs occurs once, below the threshold
        assert_eq!(table.support(&"eggs"), None);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_duplicates_collapse_within_transaction() {
        let transactions = vec![vec!["a", "a", "b"], vec!["a", "b", "b"]];
        let table = FrequencyTable::from_transactions(&transactions, 1);

        assert_eq!(table.support(&"a"), Some(2));
        assert_eq!(table.support(&"b"), Some(2));
    }

    #[test]
    fn test_ordering_with_tie_break() {
        let table = FrequencyTable::from_transactions(&dataset(), 2);
        let ordered = table.ordered_items();

        // bread/diaper/milk tie at 4 and resolve alphabetically
        assert_eq!(ordered, vec!["bread", "diaper", "milk", "beer", "cola"]);
    }

    #[test]
    fn test_sort_and_filter_transaction() {
        let table = FrequencyTable::from_transactions(&dataset(), 2);

        let sorted = table.sort_and_filter(&["eggs", "beer", "diaper", "bread"]);
        assert_eq!(sorted, vec!["bread", "diaper", "beer"]);

        // duplicates collapse, fully infrequent input empties out
        assert_eq!(table.sort_and_filter(&["cola", "cola"]), vec!["cola"]);
        assert!(table.sort_and_filter(&["eggs"]).is_empty());
    }

    #[test]
    fn test_weighted_pattern_base_counts() {
        let base = vec![
            (vec!["bread", "diaper"], 2),
            (vec!["diaper"], 1),
            (vec!["bread"], 1),
        ];
        let table = FrequencyTable::from_pattern_base(&base, 3);

        assert_eq!(table.support(&"bread"), Some(3));
        assert_eq!(table.support(&"diaper"), Some(3));

        let pruned = FrequencyTable::from_pattern_base(&base, 4);
        assert!(pruned.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let table: FrequencyTable<u32> = FrequencyTable::from_transactions(&[], 1);
        assert!(table.is_empty());
        assert!(table.ordered_items().is_empty());
    }
}
