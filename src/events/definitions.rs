//! Desmo contract event definitions for blockchain event decoding
//!
//! This module provides strongly-typed definitions for the two events the
//! query list is built from:
//!
//! - **QueryCompleted** (Desmo contract): emitted when an off-chain query task
//!   finishes, carrying a request id, a task id and the raw result.
//! - **RequestID** (DesmoHub contract): emitted when a new query request is
//!   created, carrying only the request id.
//!
//! # Event Signatures
//!
//! - **QueryCompleted**: `QueryCompleted((uint256,string,bytes))`
//! - **RequestID**: `RequestID(uint256)`
//!
//! # Example: Decoding QueryCompleted events
//!
//! ```rust,ignore
//! use desmoscan::QueryCompleted;
//! use alloy_sol_types::SolEvent;
//!
//! let logs: Vec<Log> = provider.get_logs(&filter).await?;
//!
//! for log in logs {
//!     let event = QueryCompleted::decode_log(&log.inner)?;
//!     println!("request {} -> task {}", event.result.requestID, event.result.taskID);
//! }
//! ```

use std::fmt::Debug;

use alloy_primitives::B256;
use alloy_sol_types::{sol, SolEvent};

sol! {
    /// Outcome of an off-chain query task as reported by the Desmo contract.
    ///
    /// # Fields
    ///
    /// - `requestID`: Identifier of the request this result answers
    /// - `taskID`: Identifier of the off-chain task that produced the result
    /// - `result`: ABI-opaque result payload, not decoded by this crate
    struct QueryResult {
        uint256 requestID;
        string taskID;
        bytes result;
    }

    /// Emitted by the Desmo contract when a query has been executed.
    event QueryCompleted(QueryResult result);
}

impl Debug for QueryCompleted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "QueryCompleted(request_id: {}, task_id: {}, result: {})",
            self.result.requestID, self.result.taskID, self.result.result
        )
    }
}

sol! {
    /// Emitted by the DesmoHub contract when a new request id is generated.
    event RequestID(uint256 requestID);
}

impl Debug for RequestID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestID(request_id: {})", self.requestID)
    }
}

/// The event types the query list is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `QueryCompleted` on the Desmo contract
    QueryCompleted,
    /// `RequestID` on the DesmoHub contract
    RequestId,
}

impl EventKind {
    /// Solidity event name as declared in the contract ABI
    pub const fn name(&self) -> &'static str {
        match self {
            EventKind::QueryCompleted => "QueryCompleted",
            EventKind::RequestId => "RequestID",
        }
    }

    /// Canonical event signature (topic0 preimage)
    pub const fn signature(&self) -> &'static str {
        match self {
            EventKind::QueryCompleted => QueryCompleted::SIGNATURE,
            EventKind::RequestId => RequestID::SIGNATURE,
        }
    }

    /// Pre-computed keccak256 of [`signature`](Self::signature)
    pub const fn signature_hash(&self) -> B256 {
        match self {
            EventKind::QueryCompleted => QueryCompleted::SIGNATURE_HASH,
            EventKind::RequestId => RequestID::SIGNATURE_HASH,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
