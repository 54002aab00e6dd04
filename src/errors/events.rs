// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event processing.
//!
//! This module provides error types for operations in the `events` and
//! `loader` modules: fetching Desmo contract logs and decoding them into
//! display records.

use super::RpcError;

/// Errors that can occur during event processing.
///
/// This error type covers event decoding failures, logs missing the
/// block/transaction metadata a display record needs, invalid inputs and
/// RPC failures.
///
/// # Examples
///
/// ```rust,ignore
/// use desmoscan::{load_query_events, EventProcessingError, FetchStrategy};
///
/// async fn example() -> Result<(), EventProcessingError> {
///     match load_query_events(&desmo, &hub, FetchStrategy::Sequential).await {
///         Ok(events) => println!("Loaded {} events", events.len()),
///         Err(EventProcessingError::DecodeFailed { details }) => {
///             eprintln!("Unexpected log layout: {}", details);
///         }
///         Err(EventProcessingError::Rpc(e)) => {
///             eprintln!("RPC error: {}", e);
///         }
///         Err(e) => eprintln!("Other error: {}", e),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EventProcessingError {
    /// Failed to decode an event from log data.
    ///
    /// This occurs when a log entry doesn't match the expected event
    /// signature or its ABI-encoded data is malformed.
    #[error("Failed to decode event: {details}")]
    DecodeFailed {
        /// Details about why the decode failed
        details: String,
    },

    /// A log is missing metadata required to build a display record.
    ///
    /// Pending logs returned by some providers carry no block number or
    /// transaction hash.
    #[error("Log is missing {field}")]
    MissingLogField {
        /// Name of the missing field
        field: &'static str,
    },

    /// RPC error when communicating with blockchain provider.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Invalid input provided to an operation.
    ///
    /// This occurs when function arguments don't meet requirements,
    /// such as a zero chunk size.
    #[error("Invalid input: {details}")]
    InvalidInput {
        /// Details about what was invalid
        details: String,
    },
}

impl EventProcessingError {
    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        EventProcessingError::DecodeFailed {
            details: details.into(),
        }
    }

    /// Create a `MissingLogField` error for a specific field.
    pub fn missing_log_field(field: &'static str) -> Self {
        EventProcessingError::MissingLogField { field }
    }

    /// Create an `InvalidInput` error with details.
    pub fn invalid_input(details: impl Into<String>) -> Self {
        EventProcessingError::InvalidInput {
            details: details.into(),
        }
    }
}
