/// Re-export errors
pub use blockbuilder_mining_errors::mempool::*;
