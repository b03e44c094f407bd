use super::{policy::Policy, template::BlockTemplate};
use crate::model::{store::TransactionStore, tx::Transaction};
use blockbuilder_core::{debug, trace};
use std::{cmp::Ordering, collections::HashSet};

type TransactionIndex = usize;

pub struct BlockSelector {
    policy: Policy,
    /// Candidates in evaluation order: fee descending, then id ascending
    transactions: Vec<Transaction>,

    /// Indexes of selected transactions in admission order
    selected_txs: Vec<TransactionIndex>,
    total_weight: u64,
    total_fees: u64,
}

impl BlockSelector {
    pub fn new(policy: Policy, mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(fee_descending);
        Self { policy, transactions, selected_txs: vec![], total_weight: 0, total_fees: 0 }
    }

    pub fn from_store(policy: Policy, store: TransactionStore) -> Self {
        Self::new(policy, store.into_transactions())
    }

    /// select_transactions makes a single greedy pass over the candidates in
    /// evaluation order:
    /// 1. A transaction with any parent not yet admitted in this pass is skipped
    ///    and never reconsidered, even if the parent is admitted later.
    /// 2. Otherwise it is admitted and its weight added to the block weight.
    /// 3. Once the block weight reaches or exceeds the policy's max block weight
    ///    the pass stops.
    ///
    /// The weight check happens after admission, so the last admitted transaction
    /// may carry the block past the max block weight. It is kept.
    pub fn select_transactions(&mut self) -> BlockTemplate {
        self.reset();
        let mut included: HashSet<&str> = HashSet::with_capacity(self.transactions.len());

        for (index, tx) in self.transactions.iter().enumerate() {
            if let Some(parent) = tx.parents.iter().find(|parent| !included.contains(parent.as_str())) {
                trace!("Skipping tx {} (fee {}): parent {} is not in the block", tx.id, tx.fee, parent);
                continue;
            }

            included.insert(tx.id.as_str());
            self.selected_txs.push(index);
            self.total_weight = self.total_weight.saturating_add(tx.weight);
            self.total_fees = self.total_fees.saturating_add(tx.fee);
            trace!("Adding tx {} (fee {}, weight {})", tx.id, tx.fee, tx.weight);

            if self.total_weight >= self.policy.max_block_weight {
                debug!(
                    "Block weight {} reached the max block weight {} with tx {}. As such, stopping.",
                    self.total_weight, self.policy.max_block_weight, tx.id
                );
                break;
            }
        }

        self.get_template()
    }

    /// The candidates in the order they are evaluated
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn get_template(&self) -> BlockTemplate {
        // These transactions leave the selector so we clone
        let transactions = self.selected_txs.iter().map(|x| self.transactions[*x].clone()).collect();
        BlockTemplate::new(transactions, self.total_weight, self.total_fees)
    }

    fn reset(&mut self) {
        self.selected_txs = Vec::with_capacity(self.transactions.len());
        self.total_weight = 0;
        self.total_fees = 0;
    }
}

/// Selects a block template out of the whole candidate set
pub fn select_block(policy: Policy, store: TransactionStore) -> BlockTemplate {
    BlockSelector::from_store(policy, store).select_transactions()
}

/// Equal fees are ordered by ascending id so that selection is reproducible
fn fee_descending(a: &Transaction, b: &Transaction) -> Ordering {
    b.fee.cmp(&a.fee).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{block_template::policy::DEFAULT_MAX_BLOCK_WEIGHT, testutils::*};
    use itertools::Itertools;
    use rand::thread_rng;
    use std::collections::HashMap;

    fn select(max_block_weight: u64, transactions: Vec<Transaction>) -> Vec<String> {
        BlockSelector::new(Policy::new(max_block_weight), transactions).select_transactions().into_ids()
    }

    #[test]
    fn test_child_after_parent() {
        let txs = vec![tx("A", 100, 1000, &[]), tx("B", 50, 1000, &["A"])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["A", "B"]);
    }

    #[test]
    fn test_parent_evaluated_after_child_is_not_revisited() {
        let txs = vec![tx("A", 100, 1000, &["B"]), tx("B", 50, 1000, &[])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["B"]);
    }

    #[test]
    fn test_last_admission_may_exceed_capacity() {
        let txs = vec![tx("A", 10, 3_000_000, &[]), tx("B", 9, 2_000_000, &[])];
        let template = BlockSelector::new(Policy::default(), txs).select_transactions();
        assert_eq!(template.ids().collect_vec(), ["A", "B"]);
        assert_eq!(template.total_weight(), 5_000_000);
        assert_eq!(template.total_fees(), 19);
        template.verify(&Policy::default()).unwrap();
    }

    #[test]
    fn test_missing_parent_is_never_satisfied() {
        let txs = vec![tx("A", 1_000_000, 10, &["ghost"]), tx("B", 1, 10, &[]), tx("C", 2, 10, &["B", "A"])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["B"]);
    }

    #[test]
    fn test_self_parent_is_never_admitted() {
        let txs = vec![tx("A", 5, 10, &["A"]), tx("B", 1, 10, &[])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["B"]);
    }

    #[test]
    fn test_empty_candidate_set() {
        let template = select_block(Policy::default(), TransactionStore::default());
        assert!(template.is_empty());
        assert_eq!(template.total_weight(), 0);
        assert!(template.into_ids().is_empty());
    }

    #[test]
    fn test_stops_once_capacity_is_reached() {
        // C would still fit but the pass ends as soon as the limit is reached
        let txs = vec![tx("C", 8, 1, &[]), tx("B", 9, 5, &[]), tx("A", 10, 5, &[])];
        assert_eq!(select(10, txs), ["A", "B"]);

        // No look-ahead either: B overshoots and ends the pass
        let txs = vec![tx("A", 10, 3, &[]), tx("B", 9, 8, &[]), tx("C", 8, 1, &[])];
        assert_eq!(select(10, txs), ["A", "B"]);
    }

    #[test]
    fn test_below_capacity_admits_everything_eligible() {
        let txs = vec![tx("A", 3, 1, &[]), tx("B", 2, 1, &["A"]), tx("C", 1, 1, &["B"]), tx("D", 4, 1, &["Z"])];
        assert_eq!(select(100, txs), ["A", "B", "C"]);
    }

    #[test]
    fn test_zero_capacity_admits_a_single_transaction() {
        let txs = vec![tx("A", 3, 1, &[]), tx("B", 2, 1, &[])];
        let template = BlockSelector::new(Policy::new(0), txs).select_transactions();
        assert_eq!(template.ids().collect_vec(), ["A"]);
        template.verify(&Policy::new(0)).unwrap();
    }

    #[test]
    fn test_independent_transactions_in_fee_order() {
        let txs = vec![tx("a", 5, 1, &[]), tx("b", 50, 1, &[]), tx("c", 1, 1, &[]), tx("d", 20, 1, &[])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_equal_fees_break_ties_by_id() {
        let txs = vec![tx("c", 7, 1, &[]), tx("a", 7, 1, &[]), tx("b", 7, 1, &[]), tx("z", 8, 1, &[])];
        let selector = BlockSelector::new(Policy::default(), txs);
        assert_eq!(selector.transactions().iter().map(|tx| tx.id()).collect_vec(), ["z", "a", "b", "c"]);

        // Input order does not matter
        let txs = vec![tx("b", 7, 1, &[]), tx("z", 8, 1, &[]), tx("c", 7, 1, &[]), tx("a", 7, 1, &[])];
        assert_eq!(select(DEFAULT_MAX_BLOCK_WEIGHT, txs), ["z", "a", "b", "c"]);
    }

    #[test]
    fn test_repeated_selection_is_stable() {
        let mut selector = BlockSelector::new(Policy::new(25), generate_mempool(&mut thread_rng(), 200));
        let first = selector.select_transactions();
        let second = selector.select_transactions();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_mempools_uphold_block_guarantees() {
        let mut rng = thread_rng();
        for (size, max_block_weight) in [(0, 10), (1, 10), (50, 100), (500, 1_000), (2_000, 4_000), (2_000, u64::MAX)] {
            let policy = Policy::new(max_block_weight);
            let mempool = generate_mempool(&mut rng, size);
            let candidates: HashMap<String, Transaction> = mempool.iter().map(|tx| (tx.id.clone(), tx.clone())).collect();

            let template = BlockSelector::new(policy, mempool).select_transactions();
            template.verify(&policy).unwrap();

            // Subset of the candidates, no repetitions
            assert!(template.ids().all(|id| candidates.contains_key(id)));
            assert!(template.ids().all_unique());

            // Every parent admitted strictly earlier
            let position: HashMap<&str, usize> = template.ids().enumerate().map(|(i, id)| (id, i)).collect();
            for (i, tx) in template.transactions().iter().enumerate() {
                assert!(tx.parents.iter().all(|parent| position.get(parent.as_str()).is_some_and(|&j| j < i)));
            }

            // The cap is exceeded, if at all, only by the last admission
            let weights = template.transactions().iter().map(|tx| tx.weight).collect_vec();
            let total: u64 = weights.iter().sum();
            assert_eq!(total, template.total_weight());
            if let Some(last) = weights.last() {
                assert!(weights.len() == 1 || total - last < max_block_weight);
            }

            // Admitted roots keep fee-descending order
            let root_fees = template.transactions().iter().filter(|tx| tx.is_root()).map(|tx| tx.fee).collect_vec();
            assert!(root_fees.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
