//! Reading a mempool snapshot into a [`TransactionStore`](crate::model::store::TransactionStore).
//!
//! A snapshot is a headerless CSV file with one transaction per record:
//!
//! ```text
//! <id>,<fee>,<weight>,<parent id>;<parent id>;...
//! ```
//!
//! The parents field may be empty or missing altogether. A non-empty field is split
//! as is, so `a;` names the parents `a` and the empty id, which is never admitted.
//!
//! Fee and weight are unsigned. Negative or otherwise unparseable values read as 0
//! unless [`Config::strict_numeric_fields`](config::Config) is set.

pub mod config;
pub mod errors;
pub(crate) mod loader;
