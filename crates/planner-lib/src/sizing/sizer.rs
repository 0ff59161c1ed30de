//! Shard count decision
//!
//! Two strategies compete: one shard per data node, or one shard per
//! ~30 GiB of average daily volume with a +1 baseline for headroom.

use super::sampler::{average_daily_volume, sum_recent_volumes};
use crate::cluster::ClusterApi;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    ShardCount, ShardDecision, ShardSizingRequest, ShardSource, SizingStrategy, VolumeReport,
};
use crate::observability::StructuredLogger;
use std::sync::Arc;

/// Daily volume one primary shard is expected to absorb
pub const GIB_PER_SHARD_PER_DAY: f64 = 30.0;

/// Shard count for an average daily volume
///
/// Below 30 GiB/day this is 1, otherwise `ceil(1 + volume / 30)`.
pub fn shards_for_daily_volume(average_daily_gib: f64) -> ShardCount {
    if average_daily_gib < GIB_PER_SHARD_PER_DAY {
        return ShardCount::ONE;
    }
    let shards = (1.0 + average_daily_gib / GIB_PER_SHARD_PER_DAY).ceil() as u32;
    ShardCount::new(shards).unwrap_or(ShardCount::ONE)
}

/// Decides how many primary shards a template should use
pub struct ShardSizer {
    cluster: Arc<dyn ClusterApi>,
    sample_window_days: u32,
    logger: StructuredLogger,
}

impl ShardSizer {
    pub fn new(
        cluster: Arc<dyn ClusterApi>,
        sample_window_days: u32,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            cluster,
            sample_window_days,
            logger,
        }
    }

    /// Resolve the shard count for a request
    ///
    /// An explicit count is returned as-is and no strategy runs.
    pub async fn decide_shard_count(
        &self,
        request: &ShardSizingRequest,
    ) -> PlannerResult<ShardDecision> {
        let decision = match (request.explicit_shard_count, request.strategy) {
            (Some(shard_count), _) => ShardDecision {
                shard_count,
                source: ShardSource::Explicit,
            },
            (None, SizingStrategy::ByDataNodeCount) => ShardDecision {
                shard_count: self.shards_by_data_nodes().await?,
                source: ShardSource::DataNodeCount,
            },
            (None, SizingStrategy::ByVolume) => ShardDecision {
                shard_count: self.volume_report(&request.index_pattern).await?.recommended,
                source: ShardSource::Volume,
            },
        };

        self.logger.log_shard_decision(&request.index_pattern, &decision);
        Ok(decision)
    }

    /// One shard per data node reported by cluster health
    pub async fn shards_by_data_nodes(&self) -> PlannerResult<ShardCount> {
        let health = self.cluster.cluster_health().await?;
        ShardCount::new(health.number_of_data_nodes).ok_or_else(|| {
            PlannerError::ClusterUnavailable("cluster reports no data nodes".to_string())
        })
    }

    /// Sample recent index sizes for a pattern and derive a shard count
    pub async fn volume_report(&self, index_pattern: &str) -> PlannerResult<VolumeReport> {
        let records = self.cluster.list_indices(index_pattern).await?;
        if records.is_empty() {
            return Err(PlannerError::NoHistoricalData {
                pattern: index_pattern.to_string(),
            });
        }

        let window = (self.sample_window_days as usize).min(records.len());
        let total_gib = sum_recent_volumes(&records, window)?;
        let average_daily_gib = average_daily_volume(total_gib, self.sample_window_days);

        self.logger.log_volume_sample(
            index_pattern,
            records.len(),
            window,
            total_gib,
            average_daily_gib,
        );

        let mut sampled = records;
        sampled.truncate(window);
        Ok(VolumeReport {
            index_pattern: index_pattern.to_string(),
            sample_window_days: self.sample_window_days,
            sampled,
            total_gib,
            average_daily_gib,
            recommended: shards_for_daily_volume(average_daily_gib),
        })
    }
}
