//! # desmoscan
//!
//! Load, merge and paginate Desmo oracle query events from EVM chains.
//!
//! The Desmo contract emits `QueryCompleted` when an off-chain query task
//! finishes; the DesmoHub contract emits `RequestID` when a query request is
//! created. desmoscan fetches both histories, flattens them into
//! [`QueryEvent`] rows sorted newest-first, and serves them page by page.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use desmoscan::{
//!     provider::create_http_provider, ContractHandle, DesmoscanConfig, PaginationControl,
//!     QueryListTable,
//! };
//!
//! let provider = create_http_provider(&rpc_url)?;
//! let config = DesmoscanConfig::new(desmo_address, hub_address);
//!
//! let desmo = ContractHandle::with_config(provider.clone(), config.desmo_address, &config);
//! let hub = ContractHandle::with_config(provider, config.desmo_hub_address, &config);
//!
//! let mut table = QueryListTable::new(desmo, hub, &config);
//! table.initialize(PaginationControl::new(Some(10), page_changes)).await?;
//!
//! for row in table.rows() {
//!     println!("{} {} {}", row.block_number, row.task_id, row.log);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`events`]: event definitions, display records and contract access
//! - [`loader`]: fetch, decode and merge both histories
//! - [`pagination`]: page windows over the merged list
//! - [`table`]: lifecycle and published state
//! - [`config`]: contract addresses and fetch behavior
//! - [`errors`]: error types

pub mod config;
mod config_types;
pub mod errors;
pub mod events;
pub mod loader;
pub mod pagination;
pub mod provider;
mod spans;
pub mod table;

pub use config::constants::{COLUMNS, DEFAULT_PAGE_SIZE};
pub use config::{DesmoscanConfig, DesmoscanConfigBuilder, FetchStrategy};
pub use config_types::{ChunkIterator, MaxBlockRange};
pub use errors::{DesmoscanError, EventProcessingError, RpcError};
pub use events::{
    fetch_logs_chunked, ContractEvents, ContractHandle, EventKind, QueryCompleted, QueryEvent,
    QueryResult, RequestID, RequestId,
};
pub use loader::{load_query_events, merge_events};
pub use pagination::{page_slice, PageRequest, Paginator};
pub use table::{PaginationControl, QueryListTable, TableState};
