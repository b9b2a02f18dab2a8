#![allow(non_snake_case)]

use itertools::Itertools;
use log::trace;
use rayon::prelude::*;

use crate::{
    error::AprioriError,
    itemset::Itemset,
    types::{Item, Support, SupportTable, Transaction},
};

/// Candidates meeting the threshold, and the support of every candidate.
pub type ScanResult<T> = (Vec<Itemset<T>>, SupportTable<T>);

/// Count in how many transactions each candidate occurs and split off the
/// ones whose support is at least `min_support`.
///
/// Every candidate ends up in the support table, including those that never
/// occur (support 0). A candidate listed twice is counted once. Without
/// candidates there is nothing to divide, so any dataset is accepted.
pub fn scan_support<T: Item>(
    transactions: &[Transaction<T>],
    candidates: &[Itemset<T>],
    min_support: Support,
) -> Result<ScanResult<T>, AprioriError> {
    if candidates.is_empty() {
        return Ok((vec![], SupportTable::new()));
    }
    let N = num_transactions(transactions)?;
    let candidates: Vec<&Itemset<T>> = candidates.iter().unique().collect();
    trace!(
        "Scanning {} candidates against {} transactions",
        candidates.len(),
        transactions.len()
    );

    let mut candidate_counts = vec![0_usize; candidates.len()];
    for transaction in transactions {
        for (candidate, count) in candidates.iter().zip(candidate_counts.iter_mut()) {
            if candidate.is_subset_of(transaction) {
                *count += 1;
            }
        }
    }

    Ok(split_frequent(candidates, candidate_counts, N, min_support))
}

/// Same as [`scan_support`], with the candidates counted in parallel.
pub fn par_scan_support<T: Item>(
    transactions: &[Transaction<T>],
    candidates: &[Itemset<T>],
    min_support: Support,
) -> Result<ScanResult<T>, AprioriError> {
    if candidates.is_empty() {
        return Ok((vec![], SupportTable::new()));
    }
    let N = num_transactions(transactions)?;
    let candidates: Vec<&Itemset<T>> = candidates.iter().unique().collect();
    trace!(
        "Scanning {} candidates against {} transactions in parallel",
        candidates.len(),
        transactions.len()
    );

    let candidate_counts: Vec<usize> = candidates
        .par_iter()
        .map(|candidate| {
            transactions
                .iter()
                .filter(|transaction| candidate.is_subset_of(transaction))
                .count()
        })
        .collect();

    Ok(split_frequent(candidates, candidate_counts, N, min_support))
}

fn num_transactions<T>(transactions: &[Transaction<T>]) -> Result<Support, AprioriError> {
    if transactions.is_empty() {
        return Err(AprioriError::InvalidInput(
            "support is undefined for an empty dataset",
        ));
    }
    Ok(transactions.len() as Support)
}

fn split_frequent<T: Item>(
    candidates: Vec<&Itemset<T>>,
    candidate_counts: Vec<usize>,
    N: Support,
    min_support: Support,
) -> ScanResult<T> {
    let mut frequent = Vec::new();
    let mut support_table = SupportTable::with_capacity(candidates.len());

    for (candidate, count) in candidates.into_iter().zip(candidate_counts) {
        let support = count as Support / N;
        if support >= min_support {
            frequent.push(candidate.clone());
        }
        support_table.insert(candidate.clone(), support);
    }

    (frequent, support_table)
}
