use super::{BuilderError, BuilderResult, policy::Policy};
use crate::model::{TransactionId, tx::Transaction};
use itertools::Itertools;
use std::collections::HashSet;

/// The outcome of a selection pass: the admitted transactions in admission order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockTemplate {
    transactions: Vec<Transaction>,
    total_weight: u64,
    total_fees: u64,
}

impl BlockTemplate {
    pub(crate) fn new(transactions: Vec<Transaction>, total_weight: u64, total_fees: u64) -> Self {
        Self { transactions, total_weight, total_fees }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Ids of the admitted transactions, in admission order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.transactions.iter().map(|tx| tx.id.as_str())
    }

    pub fn into_ids(self) -> Vec<TransactionId> {
        self.transactions.into_iter().map(|tx| tx.id).collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn total_fees(&self) -> u64 {
        self.total_fees
    }

    /// Checks that the template upholds the guarantees of a selection pass under `policy`:
    /// every id appears once, every parent precedes its child, and only the last
    /// admission may carry the weight to or past the max block weight.
    pub fn verify(&self, policy: &Policy) -> BuilderResult<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.transactions.len());
        for tx in self.transactions.iter() {
            // Sorted so the reported parent does not depend on hash order
            if let Some(parent) = tx.parents.iter().sorted().find(|parent| !seen.contains(parent.as_str())) {
                return Err(BuilderError::ParentNotIncluded { tx: tx.id.clone(), parent: parent.clone() });
            }
            if !seen.insert(tx.id.as_str()) {
                return Err(BuilderError::DuplicateTransaction(tx.id.clone()));
            }
        }

        // The first admission is never gated by weight
        if let [_, .., last] = self.transactions.as_slice() {
            let total_weight = self.transactions.iter().fold(0u64, |acc, tx| acc.saturating_add(tx.weight));
            if total_weight.saturating_sub(last.weight) >= policy.max_block_weight {
                return Err(BuilderError::WeightLimitExceeded {
                    total_weight,
                    last_weight: last.weight,
                    limit: policy.max_block_weight,
                });
            }
        }

        Ok(())
    }
}
