//! Defaults shared by configuration and the table component

use alloy_primitives::BlockNumber;

/// Page size used when the pagination control does not report one
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// First block searched for events: the whole chain history
pub const GENESIS_BLOCK: BlockNumber = 0;

/// Column ids of the query list table, in display order
pub const COLUMNS: [&str; 4] = ["blockNumber", "txHash", "taskId", "log"];
