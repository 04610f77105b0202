// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Third-party form relay client.
//!
//! Posts a school inquiry as JSON to a hosted form endpoint. One attempt per
//! submission; a rejected or failed POST is reported to the visitor as a
//! blocking alert.

use reqwest::header::ACCEPT;
use std::time::Duration;
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::SchoolInquiry;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FormRelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FormRelayClient {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("failed building form relay HTTP client: {e}"))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Build a client for the configured `FORM_RELAY_URL`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config
            .form_relay_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Form relay is not configured".to_string()))?;

        Ok(Self::new(endpoint)?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the inquiry. Any 2xx response counts as accepted.
    pub async fn submit(&self, inquiry: &SchoolInquiry) -> Result<()> {
        inquiry.validate()?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(inquiry)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Form relay request failed");
                AppError::Relay {
                    status: 0,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Form relay rejected inquiry");
            return Err(AppError::Relay {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::info!(school = %inquiry.school_name, "School inquiry relayed");
        Ok(())
    }
}
