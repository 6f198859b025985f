//! Client for the external explanation service.
//!
//! One request, one response:
//!
//! ```text
//! POST /explain  {"code": "...", "language": "python"}
//! 200            {"explanation": "..."}
//! ```
//!
//! Every failure is opaque to the user. The variants of [`ExplainError`]
//! only exist so the diagnostic log says what went wrong.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::language::Language;
use crate::{CoreError, CoreResult};

/// Alert text shown for an empty submission.
pub const EMPTY_CODE_MESSAGE: &str = "Please enter some code.";

/// Alert text shown for any request failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate explanation. Please try again.";

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
    pub language: String,
}

impl ExplainRequest {
    pub fn new(code: impl Into<String>, language: Language) -> Self {
        Self {
            code: code.into(),
            language: language.wire_name().to_string(),
        }
    }
}

/// Success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Error body the service sends with 4xx/5xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

/// The two kinds of failure the user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing to explain; no request was sent
    Validation,
    /// The request was sent and did not produce an explanation
    RequestFailure,
}

/// Errors from a submission.
///
/// `Clone` so it can be carried inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplainError {
    #[error("No code to explain")]
    EmptyCode,

    #[error("Service returned {status}{}", format_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ExplainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCode => ErrorKind::Validation,
            Self::Status { .. } | Self::Transport(_) | Self::Decode(_) => ErrorKind::RequestFailure,
        }
    }

    /// Text for the blocking alert.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => EMPTY_CODE_MESSAGE,
            ErrorKind::RequestFailure => REQUEST_FAILED_MESSAGE,
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl From<reqwest::Error> for ExplainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// HTTP client bound to one explanation endpoint.
#[derive(Debug, Clone)]
pub struct ExplainClient {
    endpoint: url::Url,
    client: reqwest::Client,
}

impl ExplainClient {
    /// Creates a client from the service configuration.
    pub fn new(config: &ServiceConfig) -> CoreResult<Self> {
        let endpoint = url::Url::parse(&config.endpoint)
            .map_err(|e| CoreError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let mut builder = reqwest::Client::builder();
        // 0 = wait as long as the service takes
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            endpoint,
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Sends one explain request and returns the explanation text.
    pub async fn explain(&self, request: ExplainRequest) -> Result<String, ExplainError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            language = %request.language,
            bytes = request.code.len(),
            "Sending explain request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ServiceErrorBody>(&body)
                .map(|b| b.error)
                .ok()
                .or_else(|| (!body.is_empty()).then_some(body));
            return Err(ExplainError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ExplainResponse = response.json().await?;
        tracing::debug!(chars = body.explanation.len(), "Explanation received");
        Ok(body.explanation)
    }
}
