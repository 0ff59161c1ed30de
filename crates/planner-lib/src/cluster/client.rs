//! HTTP client for the cluster's administrative API

use super::ClusterApi;
use crate::config::{ConnectionConfig, Credentials};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ClusterHealth, IndexSizeRecord, TemplateDocument};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;
use url::Url;

/// Cluster client over HTTP(S)
pub struct ClusterClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl ClusterClient {
    /// Create a client for the configured cluster
    pub fn new(config: &ConnectionConfig) -> PlannerResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| PlannerError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
            credentials: config.credentials(),
        })
    }

    fn request(&self, method: Method, path: &str) -> PlannerResult<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| PlannerError::Config(format!("invalid request path {}: {}", path, e)))?;
        debug!(%method, %url, "Cluster request");

        let builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        Ok(match &self.credentials {
            Credentials::Anonymous => builder,
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
        })
    }

    async fn read_success(response: Response, what: &str) -> PlannerResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(PlannerError::ClusterUnavailable(format!(
            "{} returned {}: {}",
            what, status, body
        )))
    }
}

#[async_trait]
impl ClusterApi for ClusterClient {
    async fn cluster_health(&self) -> PlannerResult<ClusterHealth> {
        let response = self.request(Method::GET, "_cluster/health")?.send().await?;
        let response = Self::read_success(response, "cluster health").await?;

        response.json().await.map_err(|e| {
            PlannerError::ClusterUnavailable(format!("invalid cluster health response: {}", e))
        })
    }

    async fn list_indices(&self, pattern: &str) -> PlannerResult<Vec<IndexSizeRecord>> {
        let path = format!("_cat/indices/{}?v&format=JSON", pattern);
        let response = self.request(Method::GET, &path)?.send().await?;

        // A concrete index name that does not exist is an empty catalog
        if response.status() == StatusCode::NOT_FOUND {
            debug!(pattern, "No indices match pattern");
            return Ok(Vec::new());
        }
        let response = Self::read_success(response, "index catalog").await?;

        response.json().await.map_err(|e| {
            PlannerError::ClusterUnavailable(format!("invalid index catalog response: {}", e))
        })
    }

    async fn put_template(
        &self,
        template_id: &str,
        document: &TemplateDocument,
    ) -> PlannerResult<serde_json::Value> {
        let path = format!("_template/{}", template_id);
        let response = self
            .request(Method::POST, &path)?
            .json(document.as_json())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlannerError::TemplateRejected {
                template_id: template_id.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}
