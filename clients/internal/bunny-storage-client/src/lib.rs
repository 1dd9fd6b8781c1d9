// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! bunny.net Storage Zone API Client
//!
//! Builds authenticated requests for the storage zone management API and
//! hands them to a [`Transport`]. Use [`ReqwestTransport`] in production and
//! a fake transport in tests.

mod error;
mod transport;

pub use error::ClientError;
pub use transport::{
    REQUEST_TIMEOUT, ReqwestTransport, Transport, TransportRequest, TransportResponse,
};

use bunny_storage_api::{StorageZoneId, StorageZoneUpdate};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

/// Header carrying the account access key
pub const ACCESS_KEY_HEADER: &str = "accesskey";

/// Authenticated client for the storage zone API
pub struct Client<T> {
    base_url: Url,
    access_key: SecretString,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Create a client rooted at `base_url` (e.g. `https://api.bunny.net`)
    pub fn new(
        base_url: &str,
        access_key: SecretString,
        transport: T,
    ) -> Result<Self, ClientError> {
        let mut url = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        // Resource paths are joined onto the base, which only keeps the
        // last path segment when it ends with a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            access_key,
            transport,
        })
    }

    /// Absolute URL of a storage zone resource
    pub fn storage_zone_url(&self, id: StorageZoneId) -> Result<Url, ClientError> {
        self.base_url
            .join(&id.path())
            .map_err(|source| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// POST an update to `/storagezone/{id}`
    ///
    /// The response is returned unread; interpreting the status is up to the
    /// caller.
    pub async fn update_storage_zone(
        &self,
        id: StorageZoneId,
        update: &StorageZoneUpdate,
    ) -> Result<Box<dyn TransportResponse>, ClientError> {
        let url = self.storage_zone_url(id)?;
        let body = serde_json::to_vec(update)?;

        debug!(method = "POST", url = %url, "Sending storage zone update");

        self.transport
            .send(TransportRequest {
                method: Method::POST,
                url,
                headers: self.json_headers()?,
                body,
            })
            .await
    }

    fn json_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut access_key = HeaderValue::from_str(self.access_key.expose_secret())
            .map_err(|_| ClientError::InvalidAccessKey)?;
        access_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(ACCESS_KEY_HEADER), access_key);
        Ok(headers)
    }
}
