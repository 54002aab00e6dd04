// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for Desmo query logs.
//!
//! This module handles:
//! - QueryCompleted and RequestID event definitions
//! - Flattening both event kinds into [`QueryEvent`] display records
//! - Typed access to a contract's event history via [`ContractEvents`]
//! - Chunked log fetching for providers with block range limits

pub mod chunked;
pub mod definitions;
pub mod record;
pub mod source;

pub use chunked::fetch_logs_chunked;
pub use definitions::{EventKind, QueryCompleted, QueryResult, RequestID};
pub use record::{QueryEvent, RequestId};
pub use source::{ContractEvents, ContractHandle};
