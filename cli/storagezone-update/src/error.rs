// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for storagezone-update

use bunny_storage_client::ClientError;
use thiserror::Error;

/// Message for a missing, zero or non-numeric storage zone id
pub const ZONE_ID_NOT_SET: &str = "Can't update, storageZoneId was not set.";

/// Errors that end a storage zone update
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Inputs are missing or malformed; raised before any network I/O
    #[error("{0}")]
    Configuration(String),

    /// The API answered with anything other than 204 No Content
    #[error("Updating failed with the status code {status}.")]
    RequestFailed { status: u16 },

    /// The request could not be built or sent, or the body could not be read
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl UpdateError {
    pub fn zone_id_not_set() -> Self {
        Self::Configuration(ZONE_ID_NOT_SET.to_string())
    }

    pub fn input_required(name: &str) -> Self {
        Self::Configuration(format!("Input required and not supplied: {}", name))
    }

    pub fn invalid_boolean(name: &str) -> Self {
        Self::Configuration(format!(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: {}\n\
             Support boolean input list: `true | True | TRUE | false | False | FALSE`",
            name
        ))
    }
}
