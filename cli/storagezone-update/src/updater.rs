// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storage zone update
//!
//! Validates the target id, logs the effective settings, sends one POST and
//! classifies the status. Nothing is retried.

use bunny_storage_api::{ApiErrorBody, StorageZoneId};
use bunny_storage_client::{Client, Transport};
use reqwest::StatusCode;
use tracing::info;

use crate::config::Config;
use crate::error::UpdateError;

/// A successful update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Updated {
    pub storage_zone_id: StorageZoneId,
}

/// Update the storage zone described by `config` using `transport`
pub async fn update_storage_zone<T: Transport>(
    config: &Config,
    transport: T,
) -> Result<Updated, UpdateError> {
    let id = StorageZoneId::new(config.storage_zone_id).ok_or_else(UpdateError::zone_id_not_set)?;

    let client = Client::new(&config.api_url, config.access_key.clone(), transport)?;

    info!(storage_zone_id = %id, "Update storage zone with the id {}", id);
    info!(
        "Replication zones: {}",
        display_or_none(&config.replication_zones.join(", "))
    );
    info!("Rewrite 404 to 200: {}", config.rewrite_404_to_200);
    info!(
        "Custom 404 file path: {}",
        display_or_none(&config.custom_404_file_path)
    );

    let body = config.request_body();
    let response = client.update_storage_zone(id, &body).await?;

    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        info!(storage_zone_id = %id, "Storage zone successfully updated");
        return Ok(Updated {
            storage_zone_id: id,
        });
    }

    if status == StatusCode::BAD_REQUEST {
        log_bad_request(&response.text().await?);
    }

    Err(UpdateError::RequestFailed {
        status: status.as_u16(),
    })
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

/// Log the diagnostic body of a 400 response, compacted when it is JSON
fn log_bad_request(body: &str) {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => {
            let detail: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
            info!(
                error_key = ?detail.error_key,
                field = ?detail.field,
                "Status 400: {}",
                json
            );
        }
        Err(_) => info!("Status 400: {}", body),
    }
}
