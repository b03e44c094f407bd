pub use blockbuilder_mining_errors::{block_template::*, mempool::*};
