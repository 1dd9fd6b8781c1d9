// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for bunny-storage-client

use thiserror::Error;

/// Errors raised while building, sending, or reading a request
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured API base URL could not be parsed
    #[error("Invalid API URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The access key contains bytes that are not allowed in a header
    #[error("Access key is not a valid header value")]
    InvalidAccessKey,

    /// Request body serialization failed
    #[error("Failed to encode request body")]
    Encode(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to create HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response
    #[error("Request failed")]
    Send(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("Failed to read response body")]
    Body(#[source] reqwest::Error),
}
