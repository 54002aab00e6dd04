// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for desmoscan integration tests
//!
//! Provides a mock [`ContractEvents`] implementation and log builders so the
//! loader and table can be exercised without a blockchain connection.

use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, Bytes, LogData, B256, U256};
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use desmoscan::{
    ContractEvents, EventProcessingError, QueryCompleted, QueryResult, RequestID, RpcError,
};

/// Shared record of mock calls, in the order they happened
#[allow(dead_code)]
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Mock contract returning canned logs
///
/// Each `query_filter` call records `"start <name>"`, yields to the runtime
/// once, then records `"end <name>"`, which makes overlapping calls visible.
///
/// # Example
///
/// ```rust,ignore
/// let desmo = MockContractEvents::new("desmo", DESMO)
///     .with_logs(vec![completed_log(5, 1, "task-1", b"ok")]);
/// ```
pub struct MockContractEvents {
    name: &'static str,
    address: Address,
    logs: Vec<Log>,
    failure: Option<String>,
    calls: CallLog,
    filters: Mutex<Vec<Filter>>,
}

impl MockContractEvents {
    /// Create a mock with no logs
    pub fn new(name: &'static str, address: Address) -> Self {
        Self {
            name,
            address,
            logs: Vec::new(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            filters: Mutex::new(Vec::new()),
        }
    }

    /// Set the logs returned by every query
    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.logs = logs;
        self
    }

    /// Make every query fail with an RPC error
    #[allow(dead_code)]
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Record calls into a log shared with other mocks
    #[allow(dead_code)]
    pub fn with_call_log(mut self, calls: CallLog) -> Self {
        self.calls = calls;
        self
    }

    /// Filters received so far
    #[allow(dead_code)]
    pub fn filters(&self) -> Vec<Filter> {
        self.filters.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContractEvents for MockContractEvents {
    fn address(&self) -> Address {
        self.address
    }

    async fn query_filter(&self, filter: &Filter) -> Result<Vec<Log>, EventProcessingError> {
        self.calls.lock().unwrap().push(format!("start {}", self.name));
        self.filters.lock().unwrap().push(filter.clone());

        tokio::task::yield_now().await;

        self.calls.lock().unwrap().push(format!("end {}", self.name));

        match &self.failure {
            Some(message) => Err(RpcError::get_logs_failed(
                self.name,
                std::io::Error::other(message.clone()),
            )
            .into()),
            None => Ok(self.logs.clone()),
        }
    }
}

/// Wrap encoded event data into an RPC log at `block_number`
pub fn create_test_log(data: LogData, block_number: u64) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: Address::ZERO,
            data,
        },
        block_hash: Some(B256::ZERO),
        block_number: Some(block_number),
        block_timestamp: None,
        transaction_hash: Some(B256::with_last_byte(block_number as u8)),
        transaction_index: Some(0),
        log_index: Some(0),
        removed: false,
    }
}

/// Build a `QueryCompleted` log
pub fn completed_log(block_number: u64, request_id: u64, task_id: &str, result: &[u8]) -> Log {
    let event = QueryCompleted {
        result: QueryResult {
            requestID: U256::from(request_id),
            taskID: task_id.to_string(),
            result: Bytes::copy_from_slice(result),
        },
    };
    create_test_log(event.encode_log_data(), block_number)
}

/// Build a `RequestID` log
pub fn request_log(block_number: u64, request_id: u64) -> Log {
    let event = RequestID {
        requestID: U256::from(request_id),
    };
    create_test_log(event.encode_log_data(), block_number)
}
