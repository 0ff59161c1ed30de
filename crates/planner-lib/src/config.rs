//! Cluster connection configuration
//!
//! Loaded once at startup from an INI file and passed by reference to every
//! component that talks to the cluster.

use crate::error::{PlannerError, PlannerResult};
use ::config::{Config, File, FileFormat, Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// INI section holding the connection settings
pub const CONNECTION_SECTION: &str = "ELASTICSEARCH_PROPERTIES";

/// Cluster connection configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub scheme: String,
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Number of most recent indices averaged by the volume strategy
    pub sample_window_days: u32,
    pub request_timeout: Duration,
}

/// Authentication applied to every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Anonymous,
    Basic { username: String, password: String },
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl ConnectionConfig {
    /// Load configuration from an INI file
    pub fn load(path: &Path) -> PlannerResult<Self> {
        let source = File::from(path).format(FileFormat::Ini).required(true);
        let settings = Config::builder().add_source(source).build()?;
        Self::from_settings(settings)
    }

    /// Load configuration from INI text
    pub fn from_ini_str(content: &str) -> PlannerResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Ini))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> PlannerResult<Self> {
        let sections: HashMap<String, Value> = settings.try_deserialize()?;
        let section = sections
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(CONNECTION_SECTION))
            .map(|(_, value)| value)
            .ok_or_else(|| {
                PlannerError::Config(format!("missing section [{}]", CONNECTION_SECTION))
            })?
            .into_table()?;

        let port = required(&section, "port")?;
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| PlannerError::Config(format!("invalid port: {:?}", port)))?;

        let days = required(&section, "number_of_days_to_sample")?;
        let sample_window_days: u32 = days.trim().parse().map_err(|_| {
            PlannerError::Config(format!("invalid number_of_days_to_sample: {:?}", days))
        })?;
        if sample_window_days == 0 {
            return Err(PlannerError::Config(
                "number_of_days_to_sample must be at least 1".to_string(),
            ));
        }

        let request_timeout = match optional(&section, "request_timeout_secs")? {
            Some(secs) => Duration::from_secs(secs.trim().parse().map_err(|_| {
                PlannerError::Config(format!("invalid request_timeout_secs: {:?}", secs))
            })?),
            None => default_request_timeout(),
        };

        let config = Self {
            scheme: required(&section, "scheme")?,
            hostname: required(&section, "hostname")?,
            port,
            username: required(&section, "username")?,
            password: required(&section, "password")?,
            sample_window_days,
            request_timeout,
        };
        config.base_url()?;
        Ok(config)
    }

    /// `scheme://hostname:port`
    pub fn base_url(&self) -> PlannerResult<Url> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(PlannerError::Config(format!(
                "unsupported scheme: {:?}",
                self.scheme
            )));
        }
        let raw = format!("{}://{}:{}", self.scheme, self.hostname, self.port);
        Url::parse(&raw).map_err(|e| PlannerError::Config(format!("invalid URL {}: {}", raw, e)))
    }

    /// Anonymous only when both username and password are empty
    pub fn credentials(&self) -> Credentials {
        if self.username.is_empty() && self.password.is_empty() {
            Credentials::Anonymous
        } else {
            Credentials::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            }
        }
    }
}

/// INI keys may come back with any casing depending on the parser
fn lookup<'a>(section: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    section
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

fn required(section: &Map<String, Value>, key: &str) -> PlannerResult<String> {
    optional(section, key)?.ok_or_else(|| PlannerError::Config(format!("missing key: {}", key)))
}

fn optional(section: &Map<String, Value>, key: &str) -> PlannerResult<Option<String>> {
    lookup(section, key)
        .map(|value| value.clone().into_string().map_err(PlannerError::from))
        .transpose()
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "****" };
        write!(
            f,
            "ConnectionConfig(scheme: {}, hostname: {}, port: {}, username: {}, password: {}, sample_window_days: {})",
            self.scheme, self.hostname, self.port, self.username, password, self.sample_window_days
        )
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
