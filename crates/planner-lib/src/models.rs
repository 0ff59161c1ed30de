//! Core data models for shard planning

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary shard count, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShardCount(u32);

impl ShardCount {
    pub const ONE: ShardCount = ShardCount(1);

    /// Returns `None` for zero
    pub fn new(count: u32) -> Option<Self> {
        (count >= 1).then_some(Self(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShardCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the shard count is derived when no explicit count is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingStrategy {
    /// One shard per data node
    ByDataNodeCount,
    /// Projected from recent index sizes
    ByVolume,
}

impl SizingStrategy {
    /// Maps the boolean strategy selector of the command surface
    pub fn from_use_data_nodes(use_data_nodes: bool) -> Self {
        if use_data_nodes {
            SizingStrategy::ByDataNodeCount
        } else {
            SizingStrategy::ByVolume
        }
    }
}

/// Where a resolved shard count came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShardSource {
    Explicit,
    DataNodeCount,
    Volume,
}

impl fmt::Display for ShardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShardSource::Explicit => "explicit",
            ShardSource::DataNodeCount => "data_node_count",
            ShardSource::Volume => "volume",
        };
        f.write_str(name)
    }
}

/// Input to the shard sizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSizingRequest {
    pub index_pattern: String,
    pub strategy: SizingStrategy,
    /// Always wins over `strategy` when present
    pub explicit_shard_count: Option<ShardCount>,
}

impl ShardSizingRequest {
    pub fn new(index_pattern: impl Into<String>, strategy: SizingStrategy) -> Self {
        Self {
            index_pattern: index_pattern.into(),
            strategy,
            explicit_shard_count: None,
        }
    }

    pub fn with_explicit_count(mut self, count: Option<ShardCount>) -> Self {
        self.explicit_shard_count = count;
        self
    }
}

/// A shard count together with the path that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardDecision {
    pub shard_count: ShardCount,
    pub source: ShardSource,
}

/// Subset of `GET /_cluster/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterHealth {
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub status: String,
    pub number_of_data_nodes: u32,
    #[serde(default)]
    pub number_of_nodes: u32,
}

/// One row of `GET /_cat/indices/{pattern}?format=JSON`
///
/// The size stays in its unit-suffixed form until it is sampled, so rows
/// outside the sampling window are never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSizeRecord {
    #[serde(rename = "index", default)]
    pub index_name: String,
    #[serde(rename = "pri.store.size", default)]
    pub primary_store_size: Option<String>,
}

impl IndexSizeRecord {
    pub fn new(index_name: impl Into<String>, primary_store_size: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            primary_store_size: Some(primary_store_size.into()),
        }
    }
}

/// Rendered template payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateDocument(serde_json::Value);

impl TemplateDocument {
    pub fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Everything needed to submit a template, computed without writing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePlan {
    pub template_id: String,
    pub index_pattern: String,
    pub decision: ShardDecision,
    pub document: TemplateDocument,
}

/// Result of a successful template write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOutcome {
    pub template_id: String,
    pub index_pattern: String,
    pub shard_count: ShardCount,
    pub strategy_used: ShardSource,
    pub acknowledged: bool,
    /// Raw cluster response body
    pub response: serde_json::Value,
    pub applied_at: DateTime<Utc>,
}

/// Read-only view of the cluster used by `inspect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeReport {
    pub index_pattern: String,
    pub sample_window_days: u32,
    pub sampled: Vec<IndexSizeRecord>,
    pub total_gib: f64,
    pub average_daily_gib: f64,
    pub recommended: ShardCount,
}
