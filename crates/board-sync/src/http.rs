//! HTTP Transport
//!
//! `BoardApi` over `reqwest`. Works natively and on wasm32 (fetch backend).

use async_trait::async_trait;
use reqwest::header::LOCATION;
use serde_json::Value;

use crate::api::{ApiResponse, BoardApi};
use crate::error::{BoardError, BoardResult};

/// REST client rooted at `base_url`
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read(path: &str, response: reqwest::Response) -> BoardResult<ApiResponse> {
        let response = response
            .error_for_status()
            .map_err(|e| BoardError::network(path, e))?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await.map_err(|e| BoardError::network(path, e))?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| BoardError::network(path, e))?
        };
        Ok(ApiResponse { body, location })
    }
}

#[async_trait(?Send)]
impl BoardApi for HttpApi {
    async fn get(&self, path: &str) -> BoardResult<ApiResponse> {
        let response = self
            .client
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BoardError::network(path, e))?;
        Self::read(path, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> BoardResult<ApiResponse> {
        let response = self
            .client
            .post(self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| BoardError::network(path, e))?;
        Self::read(path, response).await
    }

    async fn delete(&self, path: &str) -> BoardResult<()> {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| BoardError::network(path, e))?;
        Ok(())
    }
}
