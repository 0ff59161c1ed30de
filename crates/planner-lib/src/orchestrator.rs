//! Template orchestration
//!
//! Resolves a shard count, renders the template and submits it. Every step
//! runs to completion before the next one starts; any failure ends the run
//! and no template is written.

use crate::cluster::{template_id_for, ClusterApi};
use crate::error::PlannerResult;
use crate::models::{ShardSizingRequest, TemplateOutcome, TemplatePlan, VolumeReport};
use crate::observability::StructuredLogger;
use crate::sizing::ShardSizer;
use crate::template::TemplateRenderer;
use chrono::Utc;
use std::sync::Arc;

/// Composes sizing, rendering and submission
pub struct TemplateOrchestrator {
    cluster: Arc<dyn ClusterApi>,
    sizer: ShardSizer,
    renderer: TemplateRenderer,
    logger: StructuredLogger,
}

impl TemplateOrchestrator {
    pub fn new(
        cluster: Arc<dyn ClusterApi>,
        renderer: TemplateRenderer,
        sample_window_days: u32,
        logger: StructuredLogger,
    ) -> Self {
        let sizer = ShardSizer::new(cluster.clone(), sample_window_days, logger.clone());
        Self {
            cluster,
            sizer,
            renderer,
            logger,
        }
    }

    /// Resolve the shard count and render the document without writing
    pub async fn plan(&self, request: &ShardSizingRequest) -> PlannerResult<TemplatePlan> {
        let decision = self.sizer.decide_shard_count(request).await?;
        let template_id = template_id_for(&request.index_pattern);
        let document = self
            .renderer
            .render(&request.index_pattern, decision.shard_count)?;
        self.logger.log_template_rendered(&template_id, &document);

        Ok(TemplatePlan {
            template_id,
            index_pattern: request.index_pattern.clone(),
            decision,
            document,
        })
    }

    /// Submit a planned template, replacing any template with the same id
    pub async fn apply(&self, plan: TemplatePlan) -> PlannerResult<TemplateOutcome> {
        let response = match self
            .cluster
            .put_template(&plan.template_id, &plan.document)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.logger
                    .log_template_rejected(&plan.template_id, &err.to_string());
                return Err(err);
            }
        };
        self.logger.log_template_applied(&plan.template_id, &response);

        let acknowledged = response
            .get("acknowledged")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok(TemplateOutcome {
            template_id: plan.template_id,
            index_pattern: plan.index_pattern,
            shard_count: plan.decision.shard_count,
            strategy_used: plan.decision.source,
            acknowledged,
            response,
            applied_at: Utc::now(),
        })
    }

    /// Size, render and submit the template for a pattern
    pub async fn put_templates(
        &self,
        request: &ShardSizingRequest,
    ) -> PlannerResult<TemplateOutcome> {
        let plan = self.plan(request).await?;
        self.apply(plan).await
    }

    /// Volume sample for a pattern, without writing anything
    pub async fn inspect_volume(&self, index_pattern: &str) -> PlannerResult<VolumeReport> {
        self.sizer.volume_report(index_pattern).await
    }
}
