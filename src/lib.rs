//! Frequent itemset mining with the Apriori level-wise search.
//!
//! Single items are counted first. Every following level joins the frequent
//! itemsets of the previous one into candidates one item longer and keeps the
//! candidates whose support reaches the threshold, until a level comes back
//! empty.
//!
//! ```
//! use apriori::{itemset, run_apriori};
//!
//! let transactions = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
//! let result = run_apriori(transactions, 0.5).unwrap();
//!
//! assert_eq!(result.levels[2], vec![itemset![2, 3, 5]]);
//! assert_eq!(result.support_of(&itemset![4]), Some(0.25));
//! ```

#[macro_use]
pub mod itemset;

pub mod apriori;
pub mod combi;
pub mod error;
pub mod itemsets;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use apriori::{run_apriori, Apriori, FrequentItemsets};
pub use combi::join_candidates;
pub use error::AprioriError;
pub use itemset::Itemset;
pub use itemsets::{par_scan_support, scan_support, seed_candidates, ScanResult};
pub use types::{
    to_transactions, FrequentLevels, Item, ItemsetLength, Support, SupportTable, Transaction,
};
