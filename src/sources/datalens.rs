use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::models::PageResponse;
use crate::sources::PageSource;
use crate::utils::http::post_json_with_retry;

/// Pages of a DataLens chart fetched through `charts/api/run`.
pub struct DatalensSource {
    client: Client,
    config: Arc<Config>,
}

impl DatalensSource {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub fn request_body(&self, page: u32) -> Value {
        let mut params = serde_json::Map::new();
        if page > 1 {
            params.insert("_page".to_string(), Value::String(page.to_string()));
        }

        json!({
            "id": self.config.chart_id,
            "params": params,
            "responseOptions": {
                "includeConfig": true,
                "includeLogs": false
            }
        })
    }
}

#[async_trait]
impl PageSource for DatalensSource {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        info!("Fetching DataLens page {}", page);

        let body = self.request_body(page);
        let response = post_json_with_retry(
            &self.client,
            &self.config.endpoint,
            &body,
            self.config.max_retries,
        )
        .await?;

        response
            .json::<PageResponse>()
            .await
            .with_context(|| format!("Failed to decode DataLens page {}", page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_page_param() {
        let source = DatalensSource::new(Client::new(), Arc::new(Config::default()));

        assert_eq!(source.request_body(1)["params"], json!({}));
        assert_eq!(source.request_body(3)["params"], json!({"_page": "3"}));
        assert_eq!(source.request_body(2)["id"], json!("5jjsemsj8ssmr"));
        assert_eq!(
            source.request_body(2)["responseOptions"],
            json!({"includeConfig": true, "includeLogs": false})
        );
    }
}
