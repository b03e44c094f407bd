use super::{TransactionId, TransactionIdSet};

/// A candidate transaction of the mempool snapshot.
///
/// `fee` is the absolute fee offered (not a rate) and `weight` the block space it
/// would consume. `parents` may reference ids that are absent from the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub fee: u64,
    pub weight: u64,
    pub parents: TransactionIdSet,
}

impl Transaction {
    pub fn new<I, P>(id: impl Into<TransactionId>, fee: u64, weight: u64, parents: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<TransactionId>,
    {
        Self { id: id.into(), fee, weight, parents: parents.into_iter().map(Into::into).collect() }
    }

    /// Returns true if the transaction declares no parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
