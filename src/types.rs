use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::itemset::Itemset;

/// Anything that can be bought together: hashable, totally ordered and
/// shareable across the scan workers.
pub trait Item: Clone + Eq + Hash + Ord + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Send + Sync> Item for T {}

pub type ItemsetLength = usize;
pub type Support = f64;

pub type Transaction<T> = HashSet<T>;

pub type SupportTable<T> = HashMap<Itemset<T>, Support>;
pub type FrequentLevels<T> = Vec<Vec<Itemset<T>>>;

/// Materialise a raw dataset into set-valued transactions.
pub fn to_transactions<T, I, R>(raw_transactions: I) -> Vec<Transaction<T>>
where
    T: Item,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
{
    raw_transactions
        .into_iter()
        .map(|raw_transaction| raw_transaction.into_iter().collect())
        .collect()
}
