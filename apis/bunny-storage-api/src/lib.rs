// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! bunny.net Storage Zone API types
//!
//! Request and response shapes for the storage zone management endpoint
//! (`POST /storagezone/{id}`). Field names follow the API's PascalCase JSON
//! convention.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;

/// Base URL of the bunny.net management API
pub const DEFAULT_BASE_URL: &str = "https://api.bunny.net";

/// Storage zone identifier. Zero is not a valid id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageZoneId(NonZeroU64);

impl StorageZoneId {
    /// Returns `None` for zero.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Resource path relative to the API base URL, without a leading slash
    pub fn path(self) -> String {
        format!("storagezone/{}", self.0)
    }
}

impl fmt::Display for StorageZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for StorageZoneId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroU64>().map(Self)
    }
}

/// Body of a storage zone update request
///
/// Optional settings that are `None` are left out of the JSON entirely so the
/// API keeps its current value for them. `Rewrite404To200` is always sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageZoneUpdate {
    #[serde(
        rename = "ReplicationZones",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub replication_zones: Option<Vec<String>>,

    #[serde(rename = "Rewrite404To200")]
    pub rewrite_404_to_200: bool,

    #[serde(
        rename = "Custom404FilePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_404_file_path: Option<String>,
}

impl StorageZoneUpdate {
    pub fn new(rewrite_404_to_200: bool) -> Self {
        Self {
            rewrite_404_to_200,
            ..Default::default()
        }
    }

    /// Set the replication zones. An empty list leaves the field out.
    pub fn replication_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let zones: Vec<String> = zones.into_iter().map(Into::into).collect();
        self.replication_zones = if zones.is_empty() { None } else { Some(zones) };
        self
    }

    /// Set the custom 404 page. An empty path leaves the field out.
    pub fn custom_404_file_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.custom_404_file_path = if path.is_empty() { None } else { Some(path) };
        self
    }
}

/// Error payload returned by the API on a 400 response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
