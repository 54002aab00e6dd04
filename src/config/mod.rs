//! Configuration for desmoscan operations
//!
//! This module controls which contracts are queried, how much chain history is
//! searched, and how the two event queries are issued.
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use desmoscan::{DesmoscanConfigBuilder, FetchStrategy};
//! use alloy_primitives::address;
//!
//! let config = DesmoscanConfigBuilder::new(
//!     address!("1111111111111111111111111111111111111111"),
//!     address!("2222222222222222222222222222222222222222"),
//! )
//! .from_block(1_000_000)
//! .max_block_range(5000)
//! .fetch_strategy(FetchStrategy::Concurrent)
//! .build();
//!
//! assert_eq!(config.from_block, 1_000_000);
//! ```

use alloy_primitives::{Address, BlockNumber};

use crate::config_types::MaxBlockRange;

pub mod constants;

use constants::{DEFAULT_PAGE_SIZE, GENESIS_BLOCK};

/// How the two contract event queries are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// Second query is issued only after the first resolves
    #[default]
    Sequential,
    /// Both queries are in flight at once
    Concurrent,
}

/// Configuration for loading the query list
///
/// Use [`DesmoscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct DesmoscanConfig {
    /// Desmo contract, emitter of `QueryCompleted`
    pub desmo_address: Address,

    /// DesmoHub contract, emitter of `RequestID`
    pub desmo_hub_address: Address,

    /// First block searched for events
    /// Default: 0 (entire history)
    pub from_block: BlockNumber,

    /// Split the history into bounded `eth_getLogs` calls
    /// Default: None (single unbounded query per contract)
    pub max_block_range: Option<MaxBlockRange>,

    /// Default: [`FetchStrategy::Sequential`]
    pub fetch_strategy: FetchStrategy,

    /// Page size used when the pagination control does not report one
    /// Default: 50
    pub default_page_size: usize,
}

impl DesmoscanConfig {
    /// Create a config with defaults for the given contract pair
    pub fn new(desmo_address: Address, desmo_hub_address: Address) -> Self {
        Self {
            desmo_address,
            desmo_hub_address,
            from_block: GENESIS_BLOCK,
            max_block_range: None,
            fetch_strategy: FetchStrategy::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Builder for [`DesmoscanConfig`]
pub struct DesmoscanConfigBuilder {
    config: DesmoscanConfig,
}

impl DesmoscanConfigBuilder {
    /// Start from defaults for the given contract pair
    pub fn new(desmo_address: Address, desmo_hub_address: Address) -> Self {
        Self {
            config: DesmoscanConfig::new(desmo_address, desmo_hub_address),
        }
    }

    /// Set the first block searched for events
    pub fn from_block(mut self, block: BlockNumber) -> Self {
        self.config.from_block = block;
        self
    }

    /// Split log queries into chunks of at most `blocks` blocks
    pub fn max_block_range(mut self, blocks: u64) -> Self {
        self.config.max_block_range = Some(MaxBlockRange::new(blocks));
        self
    }

    /// Choose how the two event queries are issued
    pub fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.config.fetch_strategy = strategy;
        self
    }

    /// Set the fallback page size
    pub fn default_page_size(mut self, size: usize) -> Self {
        self.config.default_page_size = size;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> DesmoscanConfig {
        self.config
    }
}
