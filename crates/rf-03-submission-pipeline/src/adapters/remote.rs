//! Remote backend: posts the snapshot as JSON to a configured endpoint.
//!
//! The endpoint must answer 2xx with `{"success": true, "reference": "..."}`.
//! Anything else, including transport errors, is a failure.

use crate::config::RemoteBackendConfig;
use crate::domain::{BackendError, PipelineError};
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared_types::FormSnapshot;
use std::time::Duration;
use tracing::{debug, warn};

/// Body expected from the endpoint.
#[derive(Debug, Deserialize)]
struct RemoteReply {
    success: bool,
    #[serde(default, alias = "messageId", alias = "id")]
    reference: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemoteBackend {
    client: Client,
    config: RemoteBackendConfig,
}

impl RemoteBackend {
    pub fn new(config: RemoteBackendConfig) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| PipelineError::Backend(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl SubmissionBackend for RemoteBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        debug!(endpoint = %self.config.endpoint, "Posting submission");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(snapshot)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    BackendError::Transport(format!("Cannot connect to {}", self.config.endpoint))
                } else if e.is_timeout() {
                    BackendError::Transport(format!("Request to {} timed out", self.config.endpoint))
                } else {
                    BackendError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Remote refused submission");
            return Err(BackendError::Rejected(format!("HTTP {}", status.as_u16())));
        }

        let reply: RemoteReply = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if !reply.success {
            return Err(BackendError::Rejected(
                reply
                    .error
                    .unwrap_or_else(|| "remote reported failure".to_string()),
            ));
        }

        reply
            .reference
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| BackendError::InvalidResponse("Missing reference in response".into()))
    }
}
