// SPDX-License-Identifier: Apache-2.0

//! Collect tickets for every configured repository and print the result as JSON.
//!
//! Run with: `cargo run --example collect_reports -p easyfix-core`

use anyhow::{Context, Result};
use easyfix_core::github::auth::{create_client, resolve_api_key};
use easyfix_core::{NullReporter, TicketCollector, load_config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    let (api_key, _source) =
        resolve_api_key(&config.github).context("No GitHub credentials found")?;
    let client = create_client(&config.github, &api_key)?;

    let collector = TicketCollector::new(client, config.repositories, Box::new(NullReporter));
    let result = collector.collect().await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
