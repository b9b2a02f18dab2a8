use itertools::Itertools;

use crate::{
    itemset::Itemset,
    types::{Item, ItemsetLength},
};

/// Candidate k-itemsets from the frequent (k-1)-itemsets.
///
/// Every pair of itemsets is joined when their first k-2 items agree. This is
/// a prefix join only: subsets of the union are not checked against the
/// frequent itemsets, so for k > 2 a candidate may contain an infrequent
/// (k-1)-subset. The scan that follows settles those.
pub fn join_candidates<T: Item>(itemsets: &[Itemset<T>], k: ItemsetLength) -> Vec<Itemset<T>> {
    if k < 2 {
        return vec![];
    }
    let prefix_len = k - 2;

    itemsets
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| match (a.prefix(prefix_len), b.prefix(prefix_len)) {
            (Some(prefix_a), Some(prefix_b)) if prefix_a == prefix_b => Some(a.union(b)),
            _ => None,
        })
        // an itemset paired with a copy of itself only yields a (k-1)-itemset
        .filter(|candidate| candidate.len() == k)
        .unique()
        .collect()
}
