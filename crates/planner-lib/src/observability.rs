//! Structured logging for planning events
//!
//! Every significant step of a run emits one `tracing` event with an
//! `event` field so JSON log lines can be filtered by kind.

use crate::config::ConnectionConfig;
use crate::models::{ShardDecision, TemplateDocument};
use tracing::{info, warn};

/// Structured logger for planning events
#[derive(Clone)]
pub struct StructuredLogger {
    cluster: String,
}

impl StructuredLogger {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
        }
    }

    /// Logger labelled with the configured host
    pub fn for_config(config: &ConnectionConfig) -> Self {
        Self::new(format!("{}:{}", config.hostname, config.port))
    }

    /// Log the loaded connection properties (password masked)
    pub fn log_properties(&self, config: &ConnectionConfig) {
        info!(
            event = "properties_loaded",
            cluster = %self.cluster,
            properties = %config,
            "Cluster connection properties loaded"
        );
    }

    /// Log a volume sample
    pub fn log_volume_sample(
        &self,
        index_pattern: &str,
        available: usize,
        sampled: usize,
        total_gib: f64,
        average_daily_gib: f64,
    ) {
        info!(
            event = "volume_sampled",
            cluster = %self.cluster,
            index_pattern = %index_pattern,
            available = available,
            sampled = sampled,
            total_gib = total_gib,
            average_daily_gib = average_daily_gib,
            "Sampled recent index volume"
        );
    }

    /// Log the resolved shard count
    pub fn log_shard_decision(&self, index_pattern: &str, decision: &ShardDecision) {
        info!(
            event = "shard_count_resolved",
            cluster = %self.cluster,
            index_pattern = %index_pattern,
            shard_count = decision.shard_count.get(),
            source = %decision.source,
            "Index pattern: {} and number of shards: {}",
            index_pattern,
            decision.shard_count
        );
    }

    /// Log the rendered template document
    pub fn log_template_rendered(&self, template_id: &str, document: &TemplateDocument) {
        info!(
            event = "template_rendered",
            cluster = %self.cluster,
            template_id = %template_id,
            document = %document.as_json(),
            "Rendered index template"
        );
    }

    /// Log the cluster's answer to a template write
    pub fn log_template_applied(&self, template_id: &str, response: &serde_json::Value) {
        info!(
            event = "template_applied",
            cluster = %self.cluster,
            template_id = %template_id,
            response = %response,
            "Index template created or updated"
        );
    }

    /// Log a rejected or failed template write
    pub fn log_template_rejected(&self, template_id: &str, reason: &str) {
        warn!(
            event = "template_rejected",
            cluster = %self.cluster,
            template_id = %template_id,
            reason = %reason,
            "Index template was not written"
        );
    }
}
