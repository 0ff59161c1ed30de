//! Shard planning library for search-cluster index templates
//!
//! This crate provides the core functionality for:
//! - Reading cluster connection settings
//! - Querying cluster health and the index catalog
//! - Deciding a primary shard count (data-node count or historical volume)
//! - Rendering and submitting index templates

pub mod cluster;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod orchestrator;
pub mod sizing;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::cluster::{template_id_for, ClusterApi, ClusterClient};
pub use crate::config::{ConnectionConfig, Credentials};
pub use crate::error::{PlannerError, PlannerResult};
pub use crate::models::*;
pub use crate::observability::StructuredLogger;
pub use crate::orchestrator::TemplateOrchestrator;
pub use crate::sizing::ShardSizer;
pub use crate::template::TemplateRenderer;
