use reqwest::Client;
use std::io::{self, Write};

use crate::common::{failure, line, success, LOGIN_URL, START_HINT};
use crate::data::{render, LoginOutcome, LoginRequest, ResponseBody};
use crate::error::NetworkError;

/// One login attempt against a single endpoint.
#[derive(Debug, Clone)]
pub struct Probe {
    url: String,
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(LOGIN_URL)
    }
}

impl Probe {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Sends the request and classifies what happened. Never fails: every
    /// transport error is folded into the outcome.
    #[tracing::instrument(skip_all, fields(url = %self.url))]
    pub async fn send(&self, request: &LoginRequest) -> LoginOutcome {
        let client = match Client::builder().build() {
            Ok(client) => client,
            Err(err) => return NetworkError::classify(&err).into(),
        };

        tracing::debug!("Requesting...");

        let response = match client.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(?err, "request failed");
                return NetworkError::classify(&err).into();
            }
        };

        let status = response.status();
        tracing::debug!(%status, "response received");

        match response.text().await {
            Ok(body) => LoginOutcome::from_response(status, ResponseBody::new(body)),
            Err(err) => {
                tracing::debug!(?err, %status, "failed to read response body");
                NetworkError::NoResponse {
                    detail: err.to_string(),
                }
                .into()
            }
        }
    }

    /// Announces, sends and reports. `out` gets progress and results, `err`
    /// gets the failure banner and transport problems.
    pub async fn run_with(&self, out: &mut impl Write, err: &mut impl Write) -> LoginOutcome {
        let request = LoginRequest::fixed();
        announce(&self.url, &request, out);
        let outcome = self.send(&request).await;
        report(&outcome, out, err);
        outcome
    }
}

pub fn announce(url: &str, request: &LoginRequest, out: &mut impl Write) {
    let body = serde_json::to_string(request).unwrap_or_default();
    line(out, "🔄 Testing login API endpoint...\n");
    line(out, &format!("📤 Sending request to: {}", url));
    line(out, &format!("📦 Request body: {}", body));
    line(out, "");
}

pub fn report(outcome: &LoginOutcome, out: &mut impl Write, err: &mut impl Write) {
    match outcome {
        LoginOutcome::Success(summary) => {
            success(out);
            let summary = serde_json::to_string_pretty(summary).unwrap_or_default();
            line(out, &format!("📥 Response: {}", summary));
        }
        LoginOutcome::ServerError { status, message } => {
            failure(err);
            line(out, &format!("Status: {}", status));
            line(out, &format!("Error message: {}", render(message)));
        }
        LoginOutcome::NetworkError(NetworkError::NoResponse { .. }) => {
            failure(err);
            line(err, "❌ No response from server. Is the server running?");
            line(err, START_HINT);
        }
        LoginOutcome::NetworkError(NetworkError::NotSent { detail }) => {
            failure(err);
            line(err, &format!("Error: {}", detail));
        }
    }
}

/// Probes the local auth API once and prints the result to the console.
pub async fn run() {
    Probe::default()
        .run_with(&mut io::stdout(), &mut io::stderr())
        .await;
}
