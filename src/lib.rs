//! # FastFPGrowth: Frequent-Itemset Mining
//!
//! Implementation of the FP-growth algorithm for exact frequent-itemset
//! mining without candidate generation, with optional association-rule
//! derivation.
//!
//! ## Algorithm Overview
//!
//! FP-growth works in three phases:
//! 1. **Counting**: one pass over the transactions establishes per-item
//!    supports and discards items below the threshold
//! 2. **Tree construction**: transactions are projected onto the surviving
//!    items, sorted by descending frequency, and compressed into a shared
//!    prefix tree with per-item header chains
//! 3. **Pattern growth**: header items are peeled least-frequent-first;
//!    each item's conditional pattern base is mined recursively, so every
//!    frequent combination is found without enumerating candidates
//!
//! ## Guarantees
//! - Exactness: every reported support is an exact transaction count
//! - Closure: the result is all itemsets with support >= threshold,
//!   independent of traversal order
//! - Determinism: identical input yields an identical itemset collection
//!
//! ## References
//! Han, J., Pei, J., Yin, Y. (2000). "Mining Frequent Patterns without
//! Candidate Generation." ACM SIGMOD.

/**
 * File: /src/lib.rs
 * Created Date: Monday, February 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 6th February 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-02-02		Zihan	Created crate layout for FP-growth mining
 * 2026-02-06		Zihan	Wired rule generation into the public surface
 */

pub mod counting;
pub mod miner;
pub mod rules;
pub mod tree;
pub mod types;

pub use counting::FrequencyTable;
pub use miner::FPGrowthMiner;
pub use rules::generate_rules;
pub use tree::{FPNode, FPTree};
pub use types::{
    AssociationRule, FrequentItemset, Item, MinerConfig, MiningError, MiningResult,
};
