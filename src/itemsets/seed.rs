use itertools::Itertools;

use crate::{
    itemset::Itemset,
    types::{Item, Transaction},
};

/// 1-itemset candidates: every distinct item of the dataset, in item order.
pub fn seed_candidates<T: Item>(transactions: &[Transaction<T>]) -> Vec<Itemset<T>> {
    transactions
        .iter()
        .flatten()
        .sorted()
        .dedup()
        .cloned()
        .map(Itemset::singleton)
        .collect()
}
