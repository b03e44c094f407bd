/// The block weight capacity used when nothing else is specified
pub const DEFAULT_MAX_BLOCK_WEIGHT: u64 = 4_000_000;

/// Policy houses the policy (configuration parameters) which is used to control
/// the selection of transactions into a block template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    /// max_block_weight is the weight at or beyond which no further
    /// transactions are admitted into a block.
    pub(crate) max_block_weight: u64,
}

impl Policy {
    pub fn new(max_block_weight: u64) -> Self {
        Self { max_block_weight }
    }

    pub fn max_block_weight(&self) -> u64 {
        self.max_block_weight
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLOCK_WEIGHT)
    }
}
