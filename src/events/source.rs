// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed access to a contract's event history
//!
//! [`ContractEvents`] is the only capability the loader needs from a contract:
//! build a filter for a named event, and fetch every historical log matching a
//! filter. [`ContractHandle`] implements it on top of any alloy [`Provider`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use desmoscan::{ContractEvents, ContractHandle, EventKind};
//!
//! let desmo = ContractHandle::new(provider, desmo_address);
//! let filter = desmo.filter(EventKind::QueryCompleted);
//! let logs = desmo.query_filter(&filter).await?;
//! ```

use alloy_primitives::{Address, BlockNumber};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockNumberOrTag, Filter, Log};
use async_trait::async_trait;
use tracing::debug;

use crate::config::constants::GENESIS_BLOCK;
use crate::config::DesmoscanConfig;
use crate::config_types::MaxBlockRange;
use crate::errors::{EventProcessingError, RpcError};
use crate::events::chunked::fetch_logs_chunked;
use crate::events::definitions::EventKind;

/// Event-history capability of a single deployed contract
///
/// Implementations must return logs for the whole block range described by
/// the filter; no pagination of RPC results leaks through this interface.
#[async_trait]
pub trait ContractEvents: Send + Sync {
    /// Address of the contract whose events are queried
    fn address(&self) -> Address;

    /// Build a zero-argument filter for `event` on this contract
    ///
    /// The filter matches on emitter and event signature only; no indexed
    /// argument is constrained.
    fn filter(&self, event: EventKind) -> Filter {
        Filter::new()
            .address(self.address())
            .event_signature(event.signature_hash())
    }

    /// Fetch every historical log matching `filter`
    async fn query_filter(&self, filter: &Filter) -> Result<Vec<Log>, EventProcessingError>;
}

/// [`ContractEvents`] backed by an alloy provider
///
/// Filters span `from_block` (default genesis) through `latest`. With a
/// [`MaxBlockRange`] set, the span is resolved against the current block
/// number and fetched in chunks.
#[derive(Debug, Clone)]
pub struct ContractHandle<P> {
    provider: P,
    address: Address,
    from_block: BlockNumber,
    max_block_range: Option<MaxBlockRange>,
}

impl<P: Provider> ContractHandle<P> {
    /// Create a handle searching the entire history in one query
    pub fn new(provider: P, address: Address) -> Self {
        Self {
            provider,
            address,
            from_block: GENESIS_BLOCK,
            max_block_range: None,
        }
    }

    /// Create a handle honoring the search window of `config`
    pub fn with_config(provider: P, address: Address, config: &DesmoscanConfig) -> Self {
        Self::new(provider, address)
            .with_from_block(config.from_block)
            .with_max_block_range(config.max_block_range)
    }

    /// Start searching at `block` instead of genesis
    pub fn with_from_block(mut self, block: BlockNumber) -> Self {
        self.from_block = block;
        self
    }

    /// Split log queries into chunks of at most `range` blocks
    pub fn with_max_block_range(mut self, range: Option<MaxBlockRange>) -> Self {
        self.max_block_range = range;
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    async fn resolve_to_block(&self, filter: &Filter) -> Result<BlockNumber, RpcError> {
        match filter.get_to_block() {
            Some(block) => Ok(block),
            None => self
                .provider
                .get_block_number()
                .await
                .map_err(RpcError::get_block_number_failed),
        }
    }
}

#[async_trait]
impl<P: Provider> ContractEvents for ContractHandle<P> {
    fn address(&self) -> Address {
        self.address
    }

    fn filter(&self, event: EventKind) -> Filter {
        Filter::new()
            .address(self.address)
            .event_signature(event.signature_hash())
            .from_block(self.from_block)
            .to_block(BlockNumberOrTag::Latest)
    }

    async fn query_filter(&self, filter: &Filter) -> Result<Vec<Log>, EventProcessingError> {
        let Some(range) = self.max_block_range else {
            debug!(contract = %self.address, "Fetching logs in a single query");
            return self
                .provider
                .get_logs(filter)
                .await
                .map_err(|e| RpcError::get_logs_failed(format!("contract {}", self.address), e))
                .map_err(EventProcessingError::from);
        };

        let from_block = filter.get_from_block().unwrap_or(self.from_block);
        let to_block = self.resolve_to_block(filter).await?;
        let bounded = filter.clone().from_block(from_block).to_block(to_block);

        debug!(
            contract = %self.address,
            from_block,
            to_block,
            max_block_range = %range,
            "Fetching logs in chunks"
        );
        fetch_logs_chunked(&self.provider, bounded, range.as_u64()).await
    }
}
