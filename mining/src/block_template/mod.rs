pub(crate) mod policy;
pub(crate) mod selector;
pub(crate) mod template;

pub use blockbuilder_mining_errors::block_template::*;
