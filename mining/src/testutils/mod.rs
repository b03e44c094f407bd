use crate::model::{TransactionIdSet, tx::Transaction};
use rand::{Rng, seq::SliceRandom};

pub(crate) fn tx(id: &str, fee: u64, weight: u64, parents: &[&str]) -> Transaction {
    Transaction::new(id, fee, weight, parents.iter().copied())
}

/// Generates `count` transactions forming a random DAG, in shuffled order.
/// Roughly one in twenty transactions also depends on an id absent from the mempool.
pub(crate) fn generate_mempool(rng: &mut impl Rng, count: usize) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = Vec::with_capacity(count);
    for i in 0..count {
        let mut parents = TransactionIdSet::new();
        if i > 0 {
            for _ in 0..rng.gen_range(0..=3) {
                parents.insert(transactions[rng.gen_range(0..i)].id.clone());
            }
        }
        if rng.gen_bool(0.05) {
            parents.insert(format!("missing-{}", i));
        }
        transactions.push(Transaction { id: format!("tx-{}", i), fee: rng.gen_range(0..1_000), weight: rng.gen_range(1..=40), parents });
    }
    transactions.shuffle(rng);
    transactions
}
