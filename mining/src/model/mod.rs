use std::collections::HashSet;

pub mod store;
pub mod tx;

/// Opaque transaction identifier, kept exactly as read from the source
pub type TransactionId = String;

/// A set of unique transaction ids
pub type TransactionIdSet = HashSet<TransactionId>;
