//! Error types for shard planning

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while sizing and applying a template
///
/// Every variant is terminal for the current invocation.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Transport failure or non-success status on a read call
    #[error("Cluster unavailable: {0}")]
    ClusterUnavailable(String),

    /// Volume sizing requested for a pattern with no indices
    #[error("No historical data for index pattern: {pattern}")]
    NoHistoricalData { pattern: String },

    /// Size string without a recognized unit suffix
    #[error("Unparsable size: {0:?}")]
    UnparsableSize(String),

    /// The cluster refused the template write
    #[error("Template {template_id} rejected ({status}): {body}")]
    TemplateRejected {
        template_id: String,
        status: u16,
        body: String,
    },

    /// Template definition missing or unreadable
    #[error("Template source unavailable at {}: {source}", path.display())]
    TemplateSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template engine failure or rendered text that is not a JSON document
    #[error("Template render error: {0}")]
    TemplateRender(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

impl From<::config::ConfigError> for PlannerError {
    fn from(err: ::config::ConfigError) -> Self {
        PlannerError::Config(err.to_string())
    }
}

impl From<tera::Error> for PlannerError {
    fn from(err: tera::Error) -> Self {
        PlannerError::TemplateRender(err.to_string())
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::ClusterUnavailable(err.to_string())
    }
}
