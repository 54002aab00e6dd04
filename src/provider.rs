// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider construction helpers
//!
//! The loader only needs read access to logs, so providers are built without
//! the recommended transaction fillers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use desmoscan::provider::create_http_provider;
//!
//! let provider = create_http_provider("https://rpc.sepolia.org")?;
//! ```

use alloy_provider::{ProviderBuilder, RootProvider};

use crate::errors::RpcError;

/// Create a read-only HTTP provider for `rpc_url`
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(rpc_url: &str) -> Result<RootProvider, RpcError> {
    let endpoint: url::Url = rpc_url
        .parse()
        .map_err(|e: url::ParseError| RpcError::ProviderUrlInvalid(format!("{rpc_url}: {e}")))?;

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_http(endpoint))
}
