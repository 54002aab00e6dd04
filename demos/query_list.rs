/// Example printing the Desmo query list page by page
///
/// This example shows how to:
/// 1. Point contract handles at the Desmo and DesmoHub deployments
/// 2. Initialize a QueryListTable with a pagination control
/// 3. Drive page changes and observe the published table state
///
/// Run with:
/// ```bash
/// RPC_URL=https://rpc.sepolia.org \
/// DESMO_ADDRESS=0x... \
/// DESMO_HUB_ADDRESS=0x... \
/// PAGE_SIZE=10 \
/// MAX_BLOCK_RANGE=5000 \
/// cargo run --package desmoscan --example query_list
/// ```
///
/// MAX_BLOCK_RANGE is optional; set it when the RPC provider rejects log
/// queries over the whole chain history.
use alloy_primitives::Address;
use anyhow::{Context, Result};
use desmoscan::{
    provider::create_http_provider, ContractHandle, DesmoscanConfigBuilder, PageRequest,
    PaginationControl, QueryListTable, COLUMNS,
};
use futures::channel::mpsc;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();

    let rpc_url = env::var("RPC_URL").context("RPC_URL environment variable not set")?;
    let desmo_address: Address = env::var("DESMO_ADDRESS")
        .context("DESMO_ADDRESS environment variable not set")?
        .parse()
        .context("Failed to parse DESMO_ADDRESS")?;
    let hub_address: Address = env::var("DESMO_HUB_ADDRESS")
        .context("DESMO_HUB_ADDRESS environment variable not set")?
        .parse()
        .context("Failed to parse DESMO_HUB_ADDRESS")?;
    let page_size: Option<usize> = env::var("PAGE_SIZE")
        .ok()
        .map(|s| s.parse())
        .transpose()
        .context("Failed to parse PAGE_SIZE")?;

    let mut builder = DesmoscanConfigBuilder::new(desmo_address, hub_address);
    if let Ok(range) = env::var("MAX_BLOCK_RANGE") {
        builder = builder.max_block_range(range.parse().context("Failed to parse MAX_BLOCK_RANGE")?);
    }
    let config = builder.build();

    let provider = create_http_provider(&rpc_url)?;
    let desmo = ContractHandle::with_config(provider.clone(), config.desmo_address, &config);
    let hub = ContractHandle::with_config(provider, config.desmo_hub_address, &config);

    let (page_tx, page_rx) = mpsc::unbounded();
    let mut table = QueryListTable::new(desmo, hub, &config);
    let mut state = table.subscribe();

    info!(%desmo_address, %hub_address, "Loading query list");
    table
        .initialize(PaginationControl::new(page_size, page_rx))
        .await?;

    let size = page_size.unwrap_or(config.default_page_size).max(1);
    let pages = table.data_length().div_ceil(size);
    println!("\n=== Query list: {} events ===", table.data_length());
    println!("{}", COLUMNS.join(" | "));

    for index in 0..pages {
        if index > 0 {
            let requested = PageRequest::new(index, size);
            page_tx.unbounded_send(requested)?;
            state.wait_for(|s| s.page == Some(requested)).await?;
        }

        println!("\n--- Page {} of {} ---", index + 1, pages);
        for row in state.borrow().rows.iter() {
            println!(
                "{} | {} | {} | {}",
                row.block_number, row.transaction_hash, row.task_id, row.log
            );
        }
    }

    table.dispose();
    Ok(())
}
