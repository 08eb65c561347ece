//! HTTP client for the fine-tuning endpoint
//!
//! One call, one POST. A 200 answer is decoded and handed back; any other
//! status is logged and reported as `None`. Transport failures propagate.

use crate::error::{Error, Result};
use crate::fine_tuning::config::{FineTuningConfig, ServerConfig};
use crate::logging::JobLog;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Client that submits fine-tuning jobs to the control plane
#[derive(Clone)]
pub struct FineTuningClient {
    /// The underlying reqwest client
    client: ReqwestClient,

    /// Fully resolved `.../fine-tuning` URL
    endpoint: Url,

    /// Base model named in log lines
    base_model: Option<String>,

    log: Arc<dyn JobLog>,
}

impl FineTuningClient {
    /// Create a client for the endpoint described by `server`
    pub fn new(
        server: &ServerConfig,
        base_model: Option<String>,
        log: Arc<dyn JobLog>,
    ) -> Result<Self> {
        let client = ReqwestClient::builder().build()?;

        Ok(Self {
            client,
            endpoint: server.endpoint()?,
            base_model,
            log,
        })
    }

    /// URL every submission is posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn base_model(&self) -> Option<&str> {
        self.base_model.as_deref()
    }

    /// Submit a job document
    ///
    /// Returns `Ok(Some(_))` with the decoded body on HTTP 200 and `Ok(None)`
    /// for every other status.
    #[instrument(skip(self, config), fields(endpoint = %self.endpoint), level = "debug")]
    pub async fn submit(&self, config: &FineTuningConfig) -> Result<Option<Value>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!("Sending POST request to {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .json(config)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status == StatusCode::OK {
            self.log.info(&format!(
                "{} fine-tuned successful.",
                display_base_model(self.base_model())
            ));
            serde_json::from_str(&response_text)
                .map(Some)
                .map_err(|e| Error::UnexpectedResponse(format!("Failed to parse response: {}", e)))
        } else {
            self.log.error(&format!(
                "Failed to do fine-tuning. Status code: {}",
                status.as_u16()
            ));
            self.log.error(&format!("Response: {}", response_text));
            Ok(None)
        }
    }
}

/// Render an optional base model the way log lines show it
pub(crate) fn display_base_model(base_model: Option<&str>) -> &str {
    base_model.unwrap_or("None")
}
