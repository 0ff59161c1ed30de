//! In-memory cluster used by unit tests

use crate::cluster::ClusterApi;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ClusterHealth, IndexSizeRecord, TemplateDocument};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fake cluster that stores templates by id
#[derive(Default)]
pub struct FakeCluster {
    /// `None` makes health checks fail as if the cluster answered 503
    pub health: Option<ClusterHealth>,
    pub indices: Vec<IndexSizeRecord>,
    pub reject_templates: bool,
    pub templates: Mutex<HashMap<String, serde_json::Value>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCluster {
    pub fn with_data_nodes(count: u32) -> Self {
        Self {
            health: Some(ClusterHealth {
                cluster_name: "test".to_string(),
                status: "green".to_string(),
                number_of_data_nodes: count,
                number_of_nodes: count,
            }),
            ..Default::default()
        }
    }

    pub fn with_index_sizes(sizes: &[&str]) -> Self {
        Self {
            indices: sizes
                .iter()
                .enumerate()
                .map(|(i, size)| IndexSizeRecord::new(format!("logs_{}", i), *size))
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn template(&self, template_id: &str) -> Option<serde_json::Value> {
        self.templates.lock().unwrap().get(template_id).cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn cluster_health(&self) -> PlannerResult<ClusterHealth> {
        self.record("cluster_health".to_string());
        self.health.clone().ok_or_else(|| {
            PlannerError::ClusterUnavailable("cluster health returned 503".to_string())
        })
    }

    async fn list_indices(&self, pattern: &str) -> PlannerResult<Vec<IndexSizeRecord>> {
        self.record(format!("list_indices {}", pattern));
        Ok(self.indices.clone())
    }

    async fn put_template(
        &self,
        template_id: &str,
        document: &TemplateDocument,
    ) -> PlannerResult<serde_json::Value> {
        self.record(format!("put_template {}", template_id));
        if self.reject_templates {
            return Err(PlannerError::TemplateRejected {
                template_id: template_id.to_string(),
                status: 400,
                body: r#"{"error":"rejected"}"#.to_string(),
            });
        }
        self.templates
            .lock()
            .unwrap()
            .insert(template_id.to_string(), document.as_json().clone());
        Ok(serde_json::json!({ "acknowledged": true }))
    }
}
