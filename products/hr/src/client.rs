use std::future::Future;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::{ConfigError, SubmissionError},
    record::EmployeeRecord,
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/employees";
pub const ENDPOINT_ENV: &str = "EMPLOYEE_API_URL";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// What the server said about an accepted record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubmitReceipt {
    pub message: Option<String>,
}

/// Sends one validated record somewhere and reports how it went.
pub trait Submitter {
    fn submit(
        &self,
        record: &EmployeeRecord,
    ) -> impl Future<Output = Result<SubmitReceipt, SubmissionError>> + Send;
}

#[derive(Clone, Debug)]
pub struct ClientSettings {
    endpoint: Url,
}

impl ClientSettings {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason,
        };
        let url = Url::parse(endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(Self { endpoint: url })
    }

    /// Reads `EMPLOYEE_API_URL`, falling back to [`DEFAULT_ENDPOINT`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve(value: Option<String>) -> Result<Self, ConfigError> {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(&url),
            None => Self::new(DEFAULT_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// HTTP submitter: one JSON `POST` per call, no retries.
#[derive(Clone, Debug)]
pub struct EmployeeClient {
    http: Client,
    settings: ClientSettings,
}

#[derive(Deserialize)]
struct ServerPayload {
    #[serde(default)]
    message: Option<String>,
}

impl EmployeeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .user_agent(concat!("employee-form/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self::with_client(http, settings))
    }

    pub fn with_client(http: Client, settings: ClientSettings) -> Self {
        Self { http, settings }
    }

    async fn send(
        &self,
        record: &EmployeeRecord,
        request_id: Uuid,
    ) -> Result<SubmitReceipt, SubmissionError> {
        let response = self
            .http
            .post(self.settings.endpoint.clone())
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(record)
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "employee submission did not reach the server"))?;

        let status = response.status();
        let body = response.bytes().await?;
        let message = serde_json::from_slice::<ServerPayload>(&body)
            .ok()
            .and_then(|payload| payload.message)
            .filter(|message| !message.is_empty());

        if status.is_success() {
            info!(status = status.as_u16(), "employee submission accepted");
            Ok(SubmitReceipt { message })
        } else {
            warn!(
                status = status.as_u16(),
                server_message = message.as_deref().unwrap_or_default(),
                "employee submission rejected"
            );
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Submitter for EmployeeClient {
    async fn submit(&self, record: &EmployeeRecord) -> Result<SubmitReceipt, SubmissionError> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "employee.submit",
            %request_id,
            endpoint = %self.settings.endpoint
        );
        self.send(record, request_id).instrument(span).await
    }
}
