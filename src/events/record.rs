// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display records for the query list
//!
//! Both Desmo event kinds are flattened into a single [`QueryEvent`] shape so
//! they can be merged, sorted and paginated together.

use alloy_primitives::{BlockNumber, Bytes, TxHash, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::errors::EventProcessingError;
use crate::events::definitions::{QueryCompleted, RequestID};

/// Identifier of a Desmo query request
///
/// The contracts emit request ids as `uint256`. They are kept at full width
/// and rendered in decimal.
///
/// # Examples
///
/// ```
/// use desmoscan::RequestId;
/// use alloy_primitives::U256;
///
/// let id = RequestId::new(U256::from(42));
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(U256);

impl RequestId {
    /// Wrap a raw `uint256` request id
    pub const fn new(id: U256) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<U256> for RequestId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the query list table
///
/// Serialized field names match the table column ids used by front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEvent {
    /// Block the event was emitted in
    pub block_number: BlockNumber,
    /// Hash of the emitting transaction
    pub transaction_hash: TxHash,
    /// Off-chain task id, empty for request-created events
    pub task_id: String,
    /// Human-readable description of the event
    pub log: String,
}

impl QueryEvent {
    /// Build a completed-query record from a decoded `QueryCompleted` event.
    ///
    /// The result payload is not decoded; it is embedded in the log line as
    /// 0x-prefixed hex.
    pub fn completed(
        block_number: BlockNumber,
        transaction_hash: TxHash,
        request_id: RequestId,
        task_id: impl Into<String>,
        result: &Bytes,
    ) -> Self {
        Self {
            block_number,
            transaction_hash,
            task_id: task_id.into(),
            log: format!(
                "Query with request ID {request_id} was executed with the following result: {result}"
            ),
        }
    }

    /// Build a request-created record from a decoded `RequestID` event.
    pub fn request_created(
        block_number: BlockNumber,
        transaction_hash: TxHash,
        request_id: RequestId,
    ) -> Self {
        Self {
            block_number,
            transaction_hash,
            task_id: String::new(),
            log: format!("A new request ID was generated: {request_id}"),
        }
    }

    /// Decode a raw `QueryCompleted` log into a completed-query record.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is not a well-formed `QueryCompleted`
    /// event or carries no block number or transaction hash.
    pub fn from_query_completed(log: &Log) -> Result<Self, EventProcessingError> {
        let (block_number, transaction_hash) = log_position(log)?;
        let event = QueryCompleted::decode_log(&log.inner).map_err(|e| {
            EventProcessingError::decode_failed(format!(
                "QueryCompleted in tx {transaction_hash}: {e}"
            ))
        })?;

        let result = &event.data.result;
        Ok(Self::completed(
            block_number,
            transaction_hash,
            RequestId::new(result.requestID),
            result.taskID.clone(),
            &result.result,
        ))
    }

    /// Decode a raw `RequestID` log into a request-created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is not a well-formed `RequestID` event or
    /// carries no block number or transaction hash.
    pub fn from_request_id(log: &Log) -> Result<Self, EventProcessingError> {
        let (block_number, transaction_hash) = log_position(log)?;
        let event = RequestID::decode_log(&log.inner).map_err(|e| {
            EventProcessingError::decode_failed(format!("RequestID in tx {transaction_hash}: {e}"))
        })?;

        Ok(Self::request_created(
            block_number,
            transaction_hash,
            RequestId::new(event.data.requestID),
        ))
    }
}

fn log_position(log: &Log) -> Result<(BlockNumber, TxHash), EventProcessingError> {
    let block_number = log
        .block_number
        .ok_or(EventProcessingError::missing_log_field("block_number"))?;
    let transaction_hash = log
        .transaction_hash
        .ok_or(EventProcessingError::missing_log_field("transaction_hash"))?;
    Ok((block_number, transaction_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::definitions::QueryResult;
    use alloy_primitives::{address, b256, bytes, LogData, B256};

    fn rpc_log(data: LogData, block_number: Option<u64>) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: address!("1111111111111111111111111111111111111111"),
                data,
            },
            block_hash: Some(B256::ZERO),
            block_number,
            block_timestamp: None,
            transaction_hash: Some(b256!(
                "00000000000000000000000000000000000000000000000000000000000000aa"
            )),
            transaction_index: Some(0),
            log_index: Some(0),
            removed: false,
        }
    }

    #[test]
    fn test_completed_log_line_embeds_request_and_raw_result() {
        let event = QueryCompleted {
            result: QueryResult {
                requestID: U256::from(7),
                taskID: "task-7".to_string(),
                result: bytes!("deadbeef"),
            },
        };
        let log = rpc_log(event.encode_log_data(), Some(5));

        let record = QueryEvent::from_query_completed(&log).unwrap();

        assert_eq!(record.block_number, 5);
        assert_eq!(record.task_id, "task-7");
        assert_eq!(
            record.log,
            "Query with request ID 7 was executed with the following result: 0xdeadbeef"
        );
    }

    #[test]
    fn test_request_created_has_empty_task_id() {
        let event = RequestID {
            requestID: U256::from(12),
        };
        let log = rpc_log(event.encode_log_data(), Some(10));

        let record = QueryEvent::from_request_id(&log).unwrap();

        assert_eq!(record.block_number, 10);
        assert!(record.task_id.is_empty());
        assert_eq!(record.log, "A new request ID was generated: 12");
    }

    #[test]
    fn test_request_id_wider_than_u64_is_rendered_in_full() {
        let id = RequestId::new(U256::from(u64::MAX) + U256::from(1));
        assert_eq!(id.to_string(), "18446744073709551616");
    }

    #[test]
    fn test_pending_log_is_rejected() {
        let event = RequestID {
            requestID: U256::from(1),
        };
        let log = rpc_log(event.encode_log_data(), None);

        let err = QueryEvent::from_request_id(&log).unwrap_err();
        assert!(matches!(
            err,
            EventProcessingError::MissingLogField {
                field: "block_number"
            }
        ));
    }

    #[test]
    fn test_wrong_event_fails_to_decode() {
        let event = RequestID {
            requestID: U256::from(1),
        };
        let log = rpc_log(event.encode_log_data(), Some(1));

        let err = QueryEvent::from_query_completed(&log).unwrap_err();
        assert!(matches!(err, EventProcessingError::DecodeFailed { .. }));
    }

    #[test]
    fn test_serializes_with_column_names() {
        let record = QueryEvent::request_created(3, TxHash::ZERO, RequestId::new(U256::from(1)));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["blockNumber"], 3);
        assert_eq!(json["taskId"], "");
        assert!(json.get("transactionHash").is_some());
    }
}
