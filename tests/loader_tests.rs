// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loader tests against mock contracts

mod helpers;

use std::sync::{Arc, Mutex};

use alloy_primitives::address;
use desmoscan::{load_query_events, EventKind, EventProcessingError, FetchStrategy, RpcError};
use helpers::{completed_log, request_log, CallLog, MockContractEvents};

const DESMO: alloy_primitives::Address = address!("1111111111111111111111111111111111111111");
const HUB: alloy_primitives::Address = address!("2222222222222222222222222222222222222222");

#[tokio::test]
async fn test_scenario_merges_newest_first() {
    let desmo =
        MockContractEvents::new("desmo", DESMO).with_logs(vec![completed_log(5, 1, "task-1", b"ok")]);
    let hub = MockContractEvents::new("hub", HUB).with_logs(vec![request_log(10, 1)]);

    let events = load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].block_number, 10);
    assert_eq!(events[0].task_id, "");
    assert_eq!(events[0].log, "A new request ID was generated: 1");
    assert_eq!(events[1].block_number, 5);
    assert_eq!(events[1].task_id, "task-1");
    assert_eq!(
        events[1].log,
        "Query with request ID 1 was executed with the following result: 0x6f6b"
    );
}

#[tokio::test]
async fn test_filters_target_each_contract_and_event() {
    let desmo = MockContractEvents::new("desmo", DESMO);
    let hub = MockContractEvents::new("hub", HUB);

    load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap();

    let desmo_filters = desmo.filters();
    assert_eq!(desmo_filters.len(), 1);
    assert!(desmo_filters[0].address.matches(&DESMO));
    assert!(desmo_filters[0].topics[0].matches(&EventKind::QueryCompleted.signature_hash()));

    let hub_filters = hub.filters();
    assert_eq!(hub_filters.len(), 1);
    assert!(hub_filters[0].address.matches(&HUB));
    assert!(hub_filters[0].topics[0].matches(&EventKind::RequestId.signature_hash()));
}

#[tokio::test]
async fn test_sequential_fetches_do_not_overlap() {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let desmo = MockContractEvents::new("desmo", DESMO).with_call_log(calls.clone());
    let hub = MockContractEvents::new("hub", HUB).with_call_log(calls.clone());

    load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["start desmo", "end desmo", "start hub", "end hub"]
    );
}

#[tokio::test]
async fn test_concurrent_fetches_overlap_with_same_result() {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let logs_desmo = vec![completed_log(3, 1, "a", b""), completed_log(8, 2, "b", b"")];
    let logs_hub = vec![request_log(1, 1), request_log(6, 2)];

    let desmo = MockContractEvents::new("desmo", DESMO)
        .with_logs(logs_desmo.clone())
        .with_call_log(calls.clone());
    let hub = MockContractEvents::new("hub", HUB)
        .with_logs(logs_hub.clone())
        .with_call_log(calls.clone());

    let concurrent = load_query_events(&desmo, &hub, FetchStrategy::Concurrent)
        .await
        .unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["start desmo", "start hub", "end desmo", "end hub"]
    );

    let desmo = MockContractEvents::new("desmo", DESMO).with_logs(logs_desmo);
    let hub = MockContractEvents::new("hub", HUB).with_logs(logs_hub);
    let sequential = load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap();

    assert_eq!(concurrent, sequential);
}

#[tokio::test]
async fn test_first_fetch_failure_skips_second() {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let desmo = MockContractEvents::new("desmo", DESMO)
        .failing("connection refused")
        .with_call_log(calls.clone());
    let hub = MockContractEvents::new("hub", HUB).with_call_log(calls.clone());

    let err = load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EventProcessingError::Rpc(RpcError::GetLogsFailed { .. })
    ));
    assert!(!calls.lock().unwrap().iter().any(|c| c.ends_with("hub")));
}

#[tokio::test]
async fn test_second_fetch_failure_propagates() {
    let desmo =
        MockContractEvents::new("desmo", DESMO).with_logs(vec![completed_log(5, 1, "t", b"")]);
    let hub = MockContractEvents::new("hub", HUB).failing("rate limited");

    let result = load_query_events(&desmo, &hub, FetchStrategy::Sequential).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_undecodable_log_fails_the_load() {
    // A RequestID log served where QueryCompleted is expected
    let desmo = MockContractEvents::new("desmo", DESMO).with_logs(vec![request_log(5, 1)]);
    let hub = MockContractEvents::new("hub", HUB);

    let err = load_query_events(&desmo, &hub, FetchStrategy::Sequential)
        .await
        .unwrap_err();

    assert!(matches!(err, EventProcessingError::DecodeFailed { .. }));
}
