use log::{debug, info};

use crate::{
    combi::join_candidates,
    error::AprioriError,
    itemset::Itemset,
    itemsets::{par_scan_support, scan_support, seed_candidates, ScanResult},
    types::{to_transactions, FrequentLevels, Item, ItemsetLength, Support, SupportTable},
};

/// Frequent itemsets per level, and the support of every itemset examined.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemsets<T: Item> {
    /// `levels[i]` holds the frequent (i+1)-itemsets.
    pub levels: FrequentLevels<T>,
    pub support: SupportTable<T>,
}

impl<T: Item> FrequentItemsets<T> {
    pub fn support_of(&self, itemset: &Itemset<T>) -> Option<Support> {
        self.support.get(itemset).copied()
    }

    pub fn frequent(&self) -> impl Iterator<Item = &Itemset<T>> {
        self.levels.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (FrequentLevels<T>, SupportTable<T>) {
        (self.levels, self.support)
    }
}

/// Settings of a level-wise frequent itemset search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apriori {
    min_support: Support,
    max_len: Option<ItemsetLength>,
    parallel: bool,
}

impl Apriori {
    pub fn new(min_support: Support) -> Self {
        Apriori {
            min_support,
            max_len: None,
            parallel: false,
        }
    }

    /// Stop after the level holding itemsets of length `max_len`.
    pub fn max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Opt in to counting support on the rayon thread pool. Off by default.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scan and join level by level until a level comes back empty. That
    /// empty level is kept as the last one.
    pub fn run<T, I, R>(&self, raw_transactions: I) -> Result<FrequentItemsets<T>, AprioriError>
    where
        T: Item,
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidInput("max_len must be at least 1"));
        }

        let transactions = to_transactions(raw_transactions);
        let scan: fn(&[_], &[_], Support) -> Result<ScanResult<T>, AprioriError> =
            if self.parallel {
                par_scan_support::<T>
            } else {
                scan_support::<T>
            };

        let mut levels: FrequentLevels<T> = Vec::new();
        let mut support_table = SupportTable::new();

        let mut candidates = seed_candidates(&transactions);
        let mut size: ItemsetLength = 1;
        loop {
            let (frequent, support) = scan(&transactions, &candidates, self.min_support)?;
            debug!(
                "Level {}: {} candidates, {} frequent",
                size,
                candidates.len(),
                frequent.len()
            );

            merge_support(&mut support_table, support);

            let done = frequent.is_empty() || self.max_len == Some(size);
            levels.push(frequent);
            if done {
                break;
            }

            size += 1;
            candidates = join_candidates(&levels[size - 2], size);
        }

        info!(
            "Found {} frequent itemsets in {} levels ({} itemsets measured)",
            levels.iter().map(Vec::len).sum::<usize>(),
            levels.len(),
            support_table.len()
        );

        Ok(FrequentItemsets {
            levels,
            support: support_table,
        })
    }
}

/// Itemsets already in the table keep their first measured support.
fn merge_support<T: Item>(support_table: &mut SupportTable<T>, measured: SupportTable<T>) {
    for (itemset, value) in measured {
        support_table.entry(itemset).or_insert(value);
    }
}

/// Run the search with default settings.
pub fn run_apriori<T, I, R>(
    raw_transactions: I,
    min_support: Support,
) -> Result<FrequentItemsets<T>, AprioriError>
where
    T: Item,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
{
    Apriori::new(min_support).run(raw_transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::{hashmap, hashset};
    use std::collections::HashSet;

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";
    const D: &str = "Item D";

    fn dataset() -> Vec<Vec<u32>> {
        vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]]
    }

    fn count_support(transactions: &[Vec<u32>], itemset: &Itemset<u32>) -> Support {
        let count = transactions
            .iter()
            .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
            .count();
        count as Support / transactions.len() as Support
    }

    #[test]
    fn test_generate_frequent_itemsets_05_minsupport() {
        let result = run_apriori(dataset(), 0.5).unwrap();

        assert_eq!(
            result.levels,
            vec![
                vec![itemset![1], itemset![2], itemset![3], itemset![5]],
                vec![itemset![1, 3], itemset![2, 3], itemset![2, 5], itemset![3, 5]],
                vec![itemset![2, 3, 5]],
                vec![],
            ]
        );
        assert_eq!(
            result.support,
            hashmap! {
                itemset![1] => 0.5,
                itemset![2] => 0.75,
                itemset![3] => 0.75,
                itemset![4] => 0.25,
                itemset![5] => 0.75,
                itemset![1, 2] => 0.25,
                itemset![1, 3] => 0.5,
                itemset![1, 5] => 0.25,
                itemset![2, 3] => 0.5,
                itemset![2, 5] => 0.75,
                itemset![3, 5] => 0.5,
                itemset![2, 3, 5] => 0.5,
            }
        );
        assert_eq!(result.len(), 9);
    }

    #[test]
    fn support_table_matches_counts() {
        let transactions = dataset();
        let result = run_apriori(transactions.clone(), 0.25).unwrap();

        for (itemset, &support) in &result.support {
            assert!((0.0..=1.0).contains(&support));
            assert_eq!(support, count_support(&transactions, itemset));
        }
    }

    #[test]
    fn higher_threshold_gives_subset() {
        let thresholds = [0.0, 0.25, 0.5, 0.75, 1.0];

        let frequent: Vec<HashSet<Itemset<u32>>> = thresholds
            .iter()
            .map(|&min_support| {
                run_apriori(dataset(), min_support)
                    .unwrap()
                    .frequent()
                    .cloned()
                    .collect()
            })
            .collect();

        for pair in frequent.windows(2) {
            assert!(pair[1].is_subset(&pair[0]));
        }
    }

    #[test]
    fn min_support_1_without_common_item() {
        let transactions = vec![hashset! {A, B}, hashset! {A, C}, hashset! {B, D}];
        let result = run_apriori(transactions, 1.0).unwrap();

        assert_eq!(result.levels, vec![vec![]]);
        assert_eq!(
            result.support,
            hashmap! {
                itemset![A] => 2.0 / 3.0,
                itemset![B] => 2.0 / 3.0,
                itemset![C] => 1.0 / 3.0,
                itemset![D] => 1.0 / 3.0,
            }
        );
        assert!(result.is_empty());
    }

    #[test]
    fn min_support_1_keeps_common_item() {
        let transactions = vec![vec![A, B], vec![A, C], vec![A, B, D]];
        let result = run_apriori(transactions, 1.0).unwrap();

        assert_eq!(result.levels, vec![vec![itemset![A]], vec![]]);
        assert_eq!(result.support_of(&itemset![A]), Some(1.0));
    }

    #[test]
    fn single_transaction_yields_every_subset() {
        let result = run_apriori(vec![vec![A, B, C]], 1.0).unwrap();

        assert_eq!(
            result.levels,
            vec![
                vec![itemset![A], itemset![B], itemset![C]],
                vec![itemset![A, B], itemset![A, C], itemset![B, C]],
                vec![itemset![A, B, C]],
                vec![],
            ]
        );
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn duplicate_items_in_a_transaction() {
        let result = run_apriori(vec![vec![A, A, B], vec![A]], 1.0).unwrap();

        assert_eq!(result.levels, vec![vec![itemset![A]], vec![]]);
        assert_eq!(result.support_of(&itemset![B]), Some(0.5));
    }

    #[test]
    fn test_generate_frequent_itemsets_05_minsupport_max_len() {
        let result = Apriori::new(0.5).max_len(2).run(dataset()).unwrap();

        assert_eq!(result.levels.len(), 2);
        assert_eq!(result.levels[1].len(), 4);
        assert_eq!(result.support_of(&itemset![2, 3, 5]), None);
    }

    #[test]
    fn max_len_beyond_last_level() {
        let bounded = Apriori::new(0.5).max_len(10).run(dataset()).unwrap();
        let unbounded = run_apriori(dataset(), 0.5).unwrap();

        assert_eq!(bounded, unbounded);
    }

    #[test]
    fn max_len_0_is_invalid() {
        let result = Apriori::new(0.5).max_len(0).run(dataset());

        assert!(matches!(result, Err(AprioriError::InvalidInput(_))));
    }

    #[test]
    fn parallel_run_matches_sequential() {
        let sequential = run_apriori(dataset(), 0.25).unwrap();
        let parallel = Apriori::new(0.25).parallel(true).run(dataset()).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_dataset() {
        let result = run_apriori(Vec::<Vec<u32>>::new(), 0.5).unwrap();

        assert_eq!(result.levels, vec![vec![]]);
        assert!(result.support.is_empty());

        let parallel = Apriori::new(0.5)
            .parallel(true)
            .run(Vec::<Vec<u32>>::new())
            .unwrap();
        assert_eq!(parallel, result);
    }

    #[test]
    fn merge_keeps_first_support() {
        let mut support_table = hashmap! { itemset![1] => 0.5 };

        merge_support(
            &mut support_table,
            hashmap! { itemset![1] => 0.75, itemset![2] => 0.25 },
        );

        assert_eq!(
            support_table,
            hashmap! { itemset![1] => 0.5, itemset![2] => 0.25 }
        );
    }

    #[test]
    fn sequential_by_default() {
        assert_eq!(Apriori::new(0.5), Apriori::new(0.5).parallel(false));
    }

    #[test]
    fn threshold_outside_unit_interval() {
        let everything = run_apriori(dataset(), -1.0).unwrap();
        let nothing = run_apriori(dataset(), 2.0).unwrap();

        assert_eq!(everything.levels[0].len(), 5);
        assert_eq!(nothing.levels, vec![vec![]]);
        assert_eq!(nothing.support.len(), 5);
    }

    #[test]
    fn into_parts() {
        let (levels, support) = run_apriori(dataset(), 0.5).unwrap().into_parts();

        assert_eq!(levels.len(), 4);
        assert_eq!(support.len(), 12);
    }
}
