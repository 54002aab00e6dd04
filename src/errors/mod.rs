//! Error types for the desmoscan library.
//!
//! This module provides strongly-typed errors for all public APIs in desmoscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`EventProcessingError`], [`RpcError`])
//! - **Unified error type** ([`DesmoscanError`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! Pagination never fails: an out-of-range page is simply empty.
//!
//! # Examples
//!
//! ```rust,ignore
//! use desmoscan::{DesmoscanError, QueryListTable};
//!
//! async fn example() -> Result<(), DesmoscanError> {
//!     let mut table = QueryListTable::new(desmo, hub, config);
//!     table.initialize(control).await?;
//!     Ok(())
//! }
//! ```

mod events;
mod rpc;

pub use events::EventProcessingError;
pub use rpc::RpcError;

/// Unified error type for all desmoscan operations.
///
/// All module-specific error types automatically convert to `DesmoscanError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum DesmoscanError {
    /// Error from event loading and decoding.
    #[error("Event processing error: {0}")]
    Events(#[from] EventProcessingError),

    /// Error from provider construction or RPC calls made outside event loading.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
