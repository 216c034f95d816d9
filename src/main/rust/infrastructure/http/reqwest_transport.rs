use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{redirect, Client, ClientBuilder};

use crate::domain::errors::{DomainError, Result};
use crate::domain::ports::StatsTransport;
use crate::domain::value_objects::{Endpoint, StatsSnapshot};

/// Stats transport backed by a `reqwest` client
///
/// Redirects are not followed so a 302 from the collector surfaces as a
/// classified status instead of a silent re-post.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(request_timeout)
            .redirect(redirect::Policy::none())
            .user_agent(concat!("mircord-reporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StatsTransport for ReqwestTransport {
    async fn post_snapshot(&self, endpoint: &Endpoint, snapshot: &StatsSnapshot) -> Result<u16> {
        let response = self
            .client
            .post(endpoint.base_url())
            .header(AUTHORIZATION, endpoint.authorization())
            .json(snapshot)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::debug!("Request to {} timed out", endpoint.base_url());
                } else if e.is_connect() {
                    tracing::debug!("Could not connect to {}", endpoint.base_url());
                }
                DomainError::Transport(e.to_string())
            })?;

        Ok(response.status().as_u16())
    }
}
