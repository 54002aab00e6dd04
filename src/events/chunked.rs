// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chunked log fetching utility
//!
//! Some RPC providers reject `eth_getLogs` over the whole chain history.
//! This splits a bounded filter into block-range chunks and fetches them
//! sequentially.
//!
//! # Example
//!
//! ```rust,ignore
//! use desmoscan::fetch_logs_chunked;
//! use alloy_rpc_types::Filter;
//!
//! let filter = Filter::new()
//!     .address(desmo_address)
//!     .event_signature(QueryCompleted::SIGNATURE_HASH)
//!     .from_block(0)
//!     .to_block(latest);
//!
//! let logs = fetch_logs_chunked(&provider, filter, 2000).await?;
//! ```

use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use tracing::debug;

use crate::errors::{EventProcessingError, RpcError};
use crate::MaxBlockRange;

/// Fetch logs in chunks to handle large block ranges
///
/// Splits the filter's block range into chunks and fetches sequentially,
/// concatenating results in block order.
///
/// # Errors
///
/// Returns an error if:
/// - `chunk_size` is zero
/// - The filter doesn't have both `from_block` and `to_block` set to numbers
/// - Any chunk fetch fails (fails fast, no partial results)
pub async fn fetch_logs_chunked<P: Provider>(
    provider: &P,
    filter: Filter,
    chunk_size: u64,
) -> Result<Vec<Log>, EventProcessingError> {
    if chunk_size == 0 {
        return Err(EventProcessingError::invalid_input(
            "chunk_size must be greater than 0",
        ));
    }

    let start_block = filter
        .get_from_block()
        .ok_or_else(|| EventProcessingError::invalid_input("Filter must have from_block set"))?;

    let end_block = filter
        .get_to_block()
        .ok_or_else(|| EventProcessingError::invalid_input("Filter must have to_block set"))?;

    let max_block_range = MaxBlockRange::new(chunk_size);

    debug!(
        start_block,
        end_block,
        chunk_size,
        num_chunks = max_block_range.chunks_needed(start_block, end_block),
        "Starting chunked log fetch"
    );

    let mut all_logs = Vec::new();

    for (chunk_start, chunk_end) in max_block_range.chunk_range(start_block, end_block) {
        let chunk_filter = filter.clone().from_block(chunk_start).to_block(chunk_end);

        let logs = provider.get_logs(&chunk_filter).await.map_err(|e| {
            RpcError::get_logs_failed(format!("blocks {chunk_start}-{chunk_end}"), e)
        })?;

        debug!(chunk_start, chunk_end, logs_count = logs.len(), "Fetched logs for chunk");
        all_logs.extend(logs);
    }

    debug!(total_logs = all_logs.len(), "Finished chunked log fetch");

    Ok(all_logs)
}
