//! Search cluster administrative API
//!
//! This module provides:
//! - The `ClusterApi` trait the sizer and orchestrator depend on
//! - An HTTP implementation with optional Basic authentication
//! - Template id derivation from an index pattern

mod client;


pub use client::ClusterClient;

use crate::error::PlannerResult;
use crate::models::{ClusterHealth, IndexSizeRecord, TemplateDocument};
use async_trait::async_trait;

/// Trait for cluster access
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// `GET /_cluster/health`
    async fn cluster_health(&self) -> PlannerResult<ClusterHealth>;

    /// `GET /_cat/indices/{pattern}`, in the cluster's return order
    ///
    /// An empty result is not an error here.
    async fn list_indices(&self, pattern: &str) -> PlannerResult<Vec<IndexSizeRecord>>;

    /// `POST /_template/{template_id}`, replacing any existing template
    ///
    /// Returns the cluster's response body.
    async fn put_template(
        &self,
        template_id: &str,
        document: &TemplateDocument,
    ) -> PlannerResult<serde_json::Value>;
}

/// Derive the template id for an index pattern
///
/// Only a trailing literal `_*` is rewritten to `_template`; this is a plain
/// substring rule, not a wildcard grammar. `metrics_*` becomes
/// `metrics_template` while `logs-*` and `logs_*_old` are returned unchanged.
pub fn template_id_for(index_pattern: &str) -> String {
    match index_pattern.strip_suffix("_*") {
        Some(stem) => format!("{}_template", stem),
        None => index_pattern.to_string(),
    }
}
