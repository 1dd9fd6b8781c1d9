// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Validated action configuration

use bunny_storage_api::StorageZoneUpdate;
use secrecy::SecretString;

/// Everything one update needs, resolved from the action inputs
#[derive(Debug)]
pub struct Config {
    /// Target storage zone; zero means the input was missing or unusable
    pub storage_zone_id: u64,
    pub replication_zones: Vec<String>,
    pub rewrite_404_to_200: bool,
    /// Empty means "leave unchanged"
    pub custom_404_file_path: String,
    pub access_key: SecretString,
    /// Base URL of the management API
    pub api_url: String,
}

impl Config {
    /// Body for the update call; empty optional settings are left out
    pub fn request_body(&self) -> StorageZoneUpdate {
        StorageZoneUpdate::new(self.rewrite_404_to_200)
            .replication_zones(self.replication_zones.iter().cloned())
            .custom_404_file_path(self.custom_404_file_path.clone())
    }
}
