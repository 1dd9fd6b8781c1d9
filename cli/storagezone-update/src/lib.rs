// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storage Zone Update Action
//!
//! Updates the replication zones and 404 handling of a bunny.net storage
//! zone from a CI workflow. The action:
//!
//! - Reads its inputs from flags or `INPUT_*` environment variables
//! - Refuses a missing or zero storage zone id before any network I/O
//! - Sends a single authenticated `POST /storagezone/{id}`
//! - Treats 204 as success and everything else as failure
//!
//! # Modules
//!
//! - [`inputs`] - Flag and environment parsing
//! - [`config`] - Validated configuration and request body
//! - [`updater`] - The update call and status classification
//! - [`workflow`] - GitHub Actions workflow commands and outputs

pub mod config;
pub mod error;
pub mod inputs;
pub mod updater;
pub mod workflow;

pub use config::Config;
pub use error::UpdateError;
pub use inputs::Inputs;
pub use updater::{Updated, update_storage_zone};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("storagezone-update/", env!("CARGO_PKG_VERSION"));
