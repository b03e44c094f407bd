pub mod block_template;
pub mod mempool;
