// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport abstraction
//!
//! [`Transport`] is the only place network I/O happens. The response body is
//! read lazily through [`TransportResponse::text`], so callers that only need
//! the status never touch the body.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use url::Url;

use crate::ClientError;

/// Request timeout applied by [`ReqwestTransport`]
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully assembled request, ready to send
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Response whose body has not been read yet
#[async_trait]
pub trait TransportResponse: Send {
    fn status(&self) -> StatusCode;

    /// Consume the response and read its body as text
    async fn text(self: Box<Self>) -> Result<String, ClientError>;
}

/// Sends one request and hands back the response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Box<dyn TransportResponse>, ClientError>;
}

/// [`Transport`] backed by a reqwest client with rustls
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport that identifies itself with `user_agent`
    pub fn new(user_agent: &str) -> Result<Self, ClientError> {
        // reqwest is built with `rustls-no-provider`; an already installed
        // provider is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Box<dyn TransportResponse>, ClientError> {
        let response = self
            .http
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(ClientError::Send)?;

        Ok(Box::new(ReqwestResponse(response)))
    }
}

struct ReqwestResponse(reqwest::Response);

#[async_trait]
impl TransportResponse for ReqwestResponse {
    fn status(&self) -> StatusCode {
        self.0.status()
    }

    async fn text(self: Box<Self>) -> Result<String, ClientError> {
        self.0.text().await.map_err(ClientError::Body)
    }
}
