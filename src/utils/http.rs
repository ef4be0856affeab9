use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::config::Config;

/// Longest pause between two attempts.
pub const MAX_BACKOFF_SECS: u64 = 30;

/// Delay before retry number `attempt`: 2s, 4s, 8s... capped at `MAX_BACKOFF_SECS`.
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt).min(MAX_BACKOFF_SECS))
}

pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .pool_max_idle_per_host(2)
        .build()?;

    Ok(client)
}

/// POST a JSON body, retrying with exponential backoff on transport errors
/// and non-success statuses.
pub async fn post_json_with_retry<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
    max_retries: u32,
) -> Result<Response> {
    let mut attempts = 0;
    let mut last_error = None;

    while attempts < max_retries {
        match client.post(url).json(body).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    return Ok(response);
                } else {
                    let status = response.status();
                    warn!("HTTP error {}: {}", status, url);
                    last_error = Some(anyhow::anyhow!("HTTP error: {}", status));
                }
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                last_error = Some(e.into());
            }
        }

        attempts += 1;
        if attempts < max_retries {
            let delay = backoff_delay(attempts);
            warn!("Retrying in {:?}... (attempt {}/{})", delay, attempts + 1, max_retries);
            sleep(delay).await;
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("Max retries exceeded")))
        .context(format!("Failed to post to {} after {} attempts", url, max_retries))
}
