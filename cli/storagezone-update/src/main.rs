// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! storagezone-update - update a bunny.net storage zone from CI

use std::process::ExitCode;

use anyhow::{Context, Result};
use bunny_storage_client::ReqwestTransport;
use clap::Parser;
use secrecy::ExposeSecret;
use tracing::error;

use storagezone_update::workflow::{self, OutputTarget};
use storagezone_update::{Inputs, USER_AGENT, update_storage_zone};

/// Default log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "storagezone_update=info,bunny_storage_client=info";

#[tokio::main]
async fn main() -> ExitCode {
    let inputs = Inputs::parse();

    // Log to stdout without colours so lines read cleanly in the CI log
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        ))
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();

    match run(inputs).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            println!("{}", workflow::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(inputs: Inputs) -> Result<()> {
    let config = inputs.into_config()?;
    println!("{}", workflow::add_mask(config.access_key.expose_secret()));

    let transport = ReqwestTransport::new(USER_AGENT).context("Failed to set up HTTP transport")?;
    let updated = update_storage_zone(&config, transport).await?;

    OutputTarget::from_env()
        .set_output("storageZoneId", &updated.storage_zone_id.to_string())
        .context("Failed to set step output")?;

    Ok(())
}
