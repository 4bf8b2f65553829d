use std::time::{Duration, Instant};

use iris_core::error::AppError;
use iris_core::models::Outcome;
use iris_core::traits::Fetcher;
use reqwest::Client;
use url::Url;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP fetcher using reqwest.
///
/// Performs one GET per call with a fixed timeout and reduces the response
/// to its status line. Any failure — malformed URL, unsupported scheme,
/// connection refusal, DNS, TLS, timeout — collapses into
/// [`Outcome::Unavailable`]; the cause survives only in debug logs.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("Iris/0.1 (URL status checker)")
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Outcome {
        // Only http/https are fetchable; everything else is the sentinel.
        let parsed = match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            Ok(parsed) => {
                tracing::debug!(%url, scheme = parsed.scheme(), "unsupported scheme");
                return Outcome::Unavailable;
            }
            Err(error) => {
                tracing::debug!(%url, %error, "invalid URL");
                return Outcome::Unavailable;
            }
        };

        let started = Instant::now();
        match self.client.get(parsed).send().await {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(
                    %url,
                    %status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "fetch complete"
                );
                // Dropping the response releases the connection; the body
                // is never read.
                Outcome::Status(status.to_string())
            }
            Err(error) => {
                tracing::debug!(
                    %url,
                    %error,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "fetch failed"
                );
                Outcome::Unavailable
            }
        }
    }
}
