// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Headless query list table
//!
//! [`QueryListTable`] wires the loader and the paginator to a pagination
//! control and publishes everything a front end needs to render the table
//! through a [`TableState`] watch channel.
//!
//! # Lifecycle
//!
//! 1. [`initialize`](QueryListTable::initialize) subscribes to the control's
//!    page changes, publishes `loading = true`, loads both event histories,
//!    shows page 0 and publishes `loading = false`.
//! 2. Every page change from the control replaces the visible rows. No
//!    network call is made after initialization.
//! 3. [`dispose`](QueryListTable::dispose) (or dropping the table) releases
//!    the page-change subscription.
//!
//! # Examples
//!
//! ```rust,ignore
//! use desmoscan::{PaginationControl, QueryListTable};
//! use futures::channel::mpsc;
//!
//! let (page_tx, page_rx) = mpsc::unbounded();
//! let mut table = QueryListTable::new(desmo, hub, &config);
//! let mut state = table.subscribe();
//!
//! table.initialize(PaginationControl::new(Some(25), page_rx)).await?;
//! println!("{} of {} rows", state.borrow().rows.len(), table.data_length());
//!
//! page_tx.unbounded_send(PageRequest::new(1, 25))?;
//! state.changed().await?;
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use futures::{Stream, StreamExt};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, Instrument};

use crate::config::constants::COLUMNS;
use crate::config::{DesmoscanConfig, FetchStrategy};
use crate::errors::EventProcessingError;
use crate::events::{ContractEvents, QueryEvent};
use crate::loader::load_query_events;
use crate::pagination::{PageRequest, Paginator};
use crate::spans;

/// Everything a front end renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    /// True while the event histories are being fetched
    pub loading: bool,
    /// Rows of the visible page
    pub rows: Vec<QueryEvent>,
    /// Page the rows belong to, once one has been loaded
    pub page: Option<PageRequest>,
    /// Length of the full merged list
    pub data_length: usize,
}

/// A pagination widget as seen by the table
///
/// `page_size` is the size the control currently shows; `page_changes`
/// yields every subsequent page selection.
pub struct PaginationControl<S> {
    /// Current page size, if the control reports one
    pub page_size: Option<usize>,
    /// Stream of page selections
    pub page_changes: S,
}

impl<S> PaginationControl<S>
where
    S: Stream<Item = PageRequest> + Send + 'static,
{
    /// Wrap a page-change stream
    pub fn new(page_size: Option<usize>, page_changes: S) -> Self {
        Self {
            page_size,
            page_changes,
        }
    }
}

struct Shared {
    paginator: RwLock<Paginator>,
    state: watch::Sender<TableState>,
}

impl Shared {
    fn load_page(&self, page: PageRequest) {
        self.state.send_modify(|state| state.rows.clear());

        let (rows, data_length) = {
            let mut paginator = self.paginator.write().unwrap_or_else(PoisonError::into_inner);
            let rows = paginator.load_page(page).to_vec();
            (rows, paginator.data_length())
        };

        self.state.send_modify(|state| {
            state.rows = rows;
            state.page = Some(page);
            state.data_length = data_length;
        });
    }

    fn set_events(&self, events: Vec<QueryEvent>) {
        let data_length = events.len();
        self.paginator
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_events(events);
        self.state
            .send_modify(|state| state.data_length = data_length);
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.loading = loading);
    }
}

/// Query list table over the Desmo and DesmoHub event histories
///
/// The table exclusively owns the merged list and the visible page. Readers
/// observe them through [`subscribe`](Self::subscribe) or the accessors.
pub struct QueryListTable<C, R> {
    completed_source: C,
    request_source: R,
    strategy: FetchStrategy,
    default_page_size: usize,
    shared: Arc<Shared>,
    subscription: Option<JoinHandle<()>>,
}

impl<C, R> QueryListTable<C, R>
where
    C: ContractEvents,
    R: ContractEvents,
{
    /// Create a table in its initial, empty state
    ///
    /// `completed_source` emits `QueryCompleted`; `request_source` emits `RequestID`.
    pub fn new(completed_source: C, request_source: R, config: &DesmoscanConfig) -> Self {
        let (state, _) = watch::channel(TableState::default());
        Self {
            completed_source,
            request_source,
            strategy: config.fetch_strategy,
            default_page_size: config.default_page_size,
            shared: Arc::new(Shared {
                paginator: RwLock::new(Paginator::default()),
                state,
            }),
            subscription: None,
        }
    }

    /// Subscribe to the control, load both histories and show page 0
    ///
    /// Calling this again releases the previous subscription first and
    /// reloads from the network.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or decode failure. `loading` is reset to
    /// `false` and the page-change subscription stays active.
    pub async fn initialize<S>(
        &mut self,
        control: PaginationControl<S>,
    ) -> Result<(), EventProcessingError>
    where
        S: Stream<Item = PageRequest> + Send + 'static,
    {
        self.dispose();

        let page_size = control.page_size.unwrap_or(self.default_page_size);
        let span = spans::initialize_table(page_size);

        let shared = Arc::clone(&self.shared);
        let page_changes = control.page_changes;
        self.subscription = Some(tokio::spawn(async move {
            futures::pin_mut!(page_changes);
            while let Some(page) = page_changes.next().await {
                shared.load_page(page);
            }
            debug!("Page change stream ended");
        }));

        async {
            self.shared.set_loading(true);

            let loaded = load_query_events(
                &self.completed_source,
                &self.request_source,
                self.strategy,
            )
            .await;

            let result = match loaded {
                Ok(events) => {
                    self.shared.set_events(events);
                    self.shared.load_page(PageRequest::first(page_size));
                    info!(data_length = self.data_length(), "Query list ready");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "Failed to load query events");
                    Err(e)
                }
            };

            self.shared.set_loading(false);
            result
        }
        .instrument(span)
        .await
    }

    /// Show the page `page`, outside of the control's stream
    pub fn load_page(&self, page: PageRequest) {
        self.shared.load_page(page);
    }

    /// Release the page-change subscription
    ///
    /// Idempotent. Loaded data stays readable.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.subscription.take() {
            handle.abort();
            debug!("Released page change subscription");
        }
    }

    /// Whether a page-change subscription is currently held
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Receive every published [`TableState`]
    pub fn subscribe(&self) -> watch::Receiver<TableState> {
        self.shared.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TableState {
        self.shared.state.borrow().clone()
    }

    /// True while the event histories are being fetched
    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    /// Visible rows
    pub fn rows(&self) -> Vec<QueryEvent> {
        self.shared.state.borrow().rows.clone()
    }

    /// Length of the full merged list, independent of the visible page
    pub fn data_length(&self) -> usize {
        self.shared
            .paginator
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .data_length()
    }

    /// Column ids in display order
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }
}

impl<C, R> Drop for QueryListTable<C, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.subscription.take() {
            handle.abort();
        }
    }
}
