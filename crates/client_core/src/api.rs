use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use shared::protocol::InvestorDraft;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid investor service base url '{base_url}': {source}")]
    InvalidBaseUrl {
        base_url: String,
        source: url::ParseError,
    },
    #[error("unsupported scheme '{0}' for investor service; expected http or https")]
    UnsupportedScheme(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("investor request failed: {0}")]
    Transport(reqwest::Error),
    #[error("investor service responded with status {0}")]
    Status(StatusCode),
    #[error("investor service returned an unreadable body: {0}")]
    Decode(reqwest::Error),
}

#[async_trait]
pub trait InvestorApi: Send + Sync {
    /// Exactly one network attempt; no retry. Returns the parsed response
    /// body, whose shape is not interpreted.
    async fn create_investor(&self, payload: &InvestorDraft) -> Result<Value, SubmissionError>;
}

pub struct HttpInvestorApi {
    http: Client,
    endpoint: Url,
}

impl HttpInvestorApi {
    pub fn new(base_url: &str) -> Result<Self, SubmissionError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SubmissionError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SubmissionError::ClientBuild)?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, SubmissionError> {
        Ok(Self {
            http,
            endpoint: investors_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn investors_endpoint(base_url: &str) -> Result<Url, SubmissionError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let endpoint = Url::parse(&format!("{trimmed}/investors")).map_err(|source| {
        SubmissionError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            source,
        }
    })?;
    match endpoint.scheme() {
        "http" | "https" => Ok(endpoint),
        other => Err(SubmissionError::UnsupportedScheme(other.to_string())),
    }
}

#[async_trait]
impl InvestorApi for HttpInvestorApi {
    async fn create_investor(&self, payload: &InvestorDraft) -> Result<Value, SubmissionError> {
        info!(
            endpoint = %self.endpoint,
            full_name = %payload.full_name,
            interests = payload.areas_of_interest.len(),
            "investors: creating investor"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "investors: creation rejected by server");
            return Err(SubmissionError::Status(status));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(SubmissionError::Decode)?;
        info!(%status, "investors: investor created");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
