use std::fmt::{Display, Formatter, Result};
use std::iter::FromIterator;

use itertools::Itertools;

use crate::types::{Item, Transaction};

/// Build an [`Itemset`] from a list of items, in any order.
#[macro_export]
macro_rules! itemset {
    ($($x:expr),* $(,)?) => {
        {
            let items = vec![$($x),*];
            items.into_iter().collect::<$crate::Itemset<_>>()
        }
    };
}

/// An unordered collection of unique items, kept sorted so equal sets compare
/// and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<T>(Vec<T>);

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset(items)
    }
}

impl<T> Itemset<T> {
    pub fn singleton(item: T) -> Self {
        Itemset(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// The first `n` items in sorted order, or `None` if the itemset is shorter.
    pub fn prefix(&self, n: usize) -> Option<&[T]> {
        self.0.get(..n)
    }
}

impl<T: Item> Itemset<T> {
    pub fn union(&self, other: &Self) -> Self {
        self.0.iter().merge(other.0.iter()).dedup().cloned().collect()
    }

    pub fn is_subset_of(&self, transaction: &Transaction<T>) -> bool {
        self.0.iter().all(|item| transaction.contains(item))
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Display> Display for Itemset<T> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
