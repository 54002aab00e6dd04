// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loading the merged query event list
//!
//! Fetches `QueryCompleted` logs from the Desmo contract and `RequestID` logs
//! from the DesmoHub contract, decodes both into [`QueryEvent`] records and
//! merges them newest-first.
//!
//! # Examples
//!
//! ```rust,ignore
//! use desmoscan::{load_query_events, ContractHandle, FetchStrategy};
//!
//! let desmo = ContractHandle::new(provider.clone(), desmo_address);
//! let hub = ContractHandle::new(provider, hub_address);
//!
//! let events = load_query_events(&desmo, &hub, FetchStrategy::Sequential).await?;
//! for event in events.iter().take(10) {
//!     println!("{} {}", event.block_number, event.log);
//! }
//! ```

use alloy_rpc_types::Log;
use tracing::{debug, info, Instrument};

use crate::config::FetchStrategy;
use crate::errors::EventProcessingError;
use crate::events::{ContractEvents, EventKind, QueryEvent};
use crate::spans;

/// Fetch, decode and merge both event histories
///
/// With [`FetchStrategy::Sequential`] the `RequestID` query is only issued
/// once the `QueryCompleted` query has resolved. Either strategy yields the
/// same list since the result is fully re-sorted.
///
/// # Errors
///
/// The first fetch or decode failure is returned as-is. There is no retry
/// and no partial result.
pub async fn load_query_events<C, R>(
    completed_source: &C,
    request_source: &R,
    strategy: FetchStrategy,
) -> Result<Vec<QueryEvent>, EventProcessingError>
where
    C: ContractEvents + ?Sized,
    R: ContractEvents + ?Sized,
{
    let span = spans::load_query_events(
        completed_source.address(),
        request_source.address(),
        strategy,
    );

    async move {
        info!("Loading query events");

        let (completed, requests) = match strategy {
            FetchStrategy::Sequential => {
                let completed = fetch_records(completed_source, EventKind::QueryCompleted).await?;
                let requests = fetch_records(request_source, EventKind::RequestId).await?;
                (completed, requests)
            }
            FetchStrategy::Concurrent => futures::try_join!(
                fetch_records(completed_source, EventKind::QueryCompleted),
                fetch_records(request_source, EventKind::RequestId),
            )?,
        };

        let completed_count = completed.len();
        let request_count = requests.len();
        let merged = merge_events(completed, requests);

        info!(
            completed_count,
            request_count,
            total = merged.len(),
            "Loaded query events"
        );

        Ok(merged)
    }
    .instrument(span)
    .await
}

/// Concatenate completed-query and request-created records, newest first
///
/// The sort is stable: records sharing a block keep their concatenation order.
///
/// # Examples
///
/// ```
/// use desmoscan::{merge_events, QueryEvent, RequestId};
/// use alloy_primitives::{TxHash, U256};
///
/// let id = RequestId::new(U256::from(1));
/// let merged = merge_events(
///     vec![QueryEvent::request_created(5, TxHash::ZERO, id)],
///     vec![QueryEvent::request_created(10, TxHash::ZERO, id)],
/// );
///
/// assert_eq!(merged[0].block_number, 10);
/// assert_eq!(merged[1].block_number, 5);
/// ```
pub fn merge_events(mut completed: Vec<QueryEvent>, requests: Vec<QueryEvent>) -> Vec<QueryEvent> {
    completed.extend(requests);
    completed.sort_by(|a, b| b.block_number.cmp(&a.block_number));
    completed
}

async fn fetch_records<S>(source: &S, kind: EventKind) -> Result<Vec<QueryEvent>, EventProcessingError>
where
    S: ContractEvents + ?Sized,
{
    let span = spans::fetch_events(kind, source.address());

    async move {
        let decode: fn(&Log) -> Result<QueryEvent, EventProcessingError> = match kind {
            EventKind::QueryCompleted => QueryEvent::from_query_completed,
            EventKind::RequestId => QueryEvent::from_request_id,
        };

        let filter = source.filter(kind);
        let logs = source.query_filter(&filter).await?;
        debug!(logs_count = logs.len(), "Fetched event logs");

        logs.iter().map(decode).collect()
    }
    .instrument(span)
    .await
}
