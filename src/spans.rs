//! Tracing span creation helpers for desmoscan operations.
//!
//! Telemetry concerns are kept out of business logic: instead of using
//! `#[instrument]` attributes directly on functions, each instrumented
//! operation has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move { /* business logic */ }.instrument(span).await
//! }
//! ```

use alloy_primitives::Address;
use tracing::Span;

use crate::config::FetchStrategy;
use crate::events::EventKind;

/// Create span for loading and merging both event histories.
///
/// Parent: table initialization, or None when the loader is used directly
/// Children: fetch_events spans (one per contract)
#[inline]
pub(crate) fn load_query_events(
    completed_contract: Address,
    request_contract: Address,
    strategy: FetchStrategy,
) -> Span {
    tracing::info_span!(
        "desmoscan.load_query_events",
        completed_contract = %completed_contract,
        request_contract = %request_contract,
        strategy = ?strategy,
    )
}

/// Create span for fetching and decoding one contract's event history.
///
/// Parent: load_query_events span
/// Children: RPC calls for fetching logs
#[inline]
pub(crate) fn fetch_events(event: EventKind, contract: Address) -> Span {
    tracing::debug_span!(
        "desmoscan.fetch_events",
        event = event.name(),
        contract = %contract,
    )
}

/// Create span for a table initialization.
///
/// Parent: None (root span for this operation)
/// Children: load_query_events span
#[inline]
pub(crate) fn initialize_table(page_size: usize) -> Span {
    tracing::info_span!("desmoscan.initialize_table", page_size = page_size)
}
