//! Page-sized windows over the merged event list
//!
//! Pagination is pure in-memory slicing: it never touches the network and
//! never fails. A page past the end of the list is empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::QueryEvent;

/// A zero-based page request as reported by a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index
    pub index: usize,
    /// Number of rows per page
    pub size: usize,
}

impl PageRequest {
    /// Create a page request
    pub const fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    /// The first page for a given page size
    pub const fn first(size: usize) -> Self {
        Self { index: 0, size }
    }

    /// Half-open `[start, stop)` row range covered by this page
    ///
    /// Saturates instead of overflowing, so absurd indices just land past the end.
    pub const fn bounds(&self) -> (usize, usize) {
        let start = self.index.saturating_mul(self.size);
        (start, start.saturating_add(self.size))
    }
}

/// Slice the rows covered by `page` out of `events`
///
/// # Examples
///
/// ```
/// use desmoscan::{page_slice, PageRequest, QueryEvent, RequestId};
/// use alloy_primitives::{TxHash, U256};
///
/// let id = RequestId::new(U256::from(1));
/// let events: Vec<_> = [10, 5]
///     .into_iter()
///     .map(|block| QueryEvent::request_created(block, TxHash::ZERO, id))
///     .collect();
///
/// assert_eq!(page_slice(&events, PageRequest::new(0, 1))[0].block_number, 10);
/// assert_eq!(page_slice(&events, PageRequest::new(1, 1))[0].block_number, 5);
/// assert!(page_slice(&events, PageRequest::new(2, 1)).is_empty());
/// ```
pub fn page_slice(events: &[QueryEvent], page: PageRequest) -> &[QueryEvent] {
    let (start, stop) = page.bounds();
    let len = events.len();
    &events[start.min(len)..stop.min(len)]
}

/// Owns the full event list and the currently visible page
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    events: Vec<QueryEvent>,
    rows: Vec<QueryEvent>,
    page: Option<PageRequest>,
}

impl Paginator {
    /// Create a paginator over an already merged list
    pub fn new(events: Vec<QueryEvent>) -> Self {
        Self {
            events,
            rows: Vec::new(),
            page: None,
        }
    }

    /// Replace the full list
    ///
    /// The visible page is left untouched until the next [`load_page`](Self::load_page).
    pub fn set_events(&mut self, events: Vec<QueryEvent>) {
        self.events = events;
    }

    /// Replace the visible rows with the window for `page`
    pub fn load_page(&mut self, page: PageRequest) -> &[QueryEvent] {
        self.rows.clear();
        self.rows.extend_from_slice(page_slice(&self.events, page));
        self.page = Some(page);

        debug!(
            page_index = page.index,
            page_size = page.size,
            rows = self.rows.len(),
            total = self.events.len(),
            "Loaded page"
        );

        &self.rows
    }

    /// Currently visible rows
    pub fn rows(&self) -> &[QueryEvent] {
        &self.rows
    }

    /// Last page loaded, if any
    pub fn page(&self) -> Option<PageRequest> {
        self.page
    }

    /// The full merged list
    pub fn events(&self) -> &[QueryEvent] {
        &self.events
    }

    /// Length of the full list, independent of the visible page
    pub fn data_length(&self) -> usize {
        self.events.len()
    }
}
