//! Fee-greedy block template selection over a static mempool snapshot.
//!
//! A [`TransactionStore`] holds the candidate set, typically read with
//! [`load_mempool`]. A [`BlockSelector`] then admits transactions in
//! fee-descending order as long as all their parents were admitted before
//! them, until the block weight reaches the [`Policy`] limit.

mod block_template;
pub mod errors;
pub mod mempool;
pub mod model;

#[cfg(test)]
pub(crate) mod testutils;

pub use block_template::{
    policy::{DEFAULT_MAX_BLOCK_WEIGHT, Policy},
    selector::{BlockSelector, select_block},
    template::BlockTemplate,
};
pub use mempool::{
    config::Config as MempoolConfig,
    loader::{load_mempool, read_mempool},
};
pub use model::{TransactionId, TransactionIdSet, store::TransactionStore, tx::Transaction};
