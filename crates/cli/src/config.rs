//! Configuration file discovery for the CLI

use anyhow::{Context, Result};
use planner_lib::template::TemplateRenderer;
use std::path::{Path, PathBuf};

/// Connection properties file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "template.ini";

/// Template definition looked up in the working directory
pub const DEFAULT_TEMPLATE_FILE: &str = "template/index_template.mustache";

/// Resolve the connection properties file
///
/// An explicit path is used as-is. Otherwise `./template.ini`, then
/// `~/.config/shard-planner/template.ini`.
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }

    let home = dirs_next::home_dir().context("Could not determine home directory")?;
    let user = home
        .join(".config")
        .join("shard-planner")
        .join(DEFAULT_CONFIG_FILE);
    if user.exists() {
        return Ok(user);
    }

    anyhow::bail!(
        "No configuration found: pass --config or create {} or {}",
        DEFAULT_CONFIG_FILE,
        user.display()
    )
}

/// Pick the template definition
///
/// An explicit path must exist when rendered. Without one, the working
/// directory copy wins over the bundled template.
pub fn template_renderer(override_path: Option<&Path>) -> TemplateRenderer {
    match override_path {
        Some(path) => TemplateRenderer::from_path(path),
        None if Path::new(DEFAULT_TEMPLATE_FILE).exists() => {
            TemplateRenderer::from_path(DEFAULT_TEMPLATE_FILE)
        }
        None => TemplateRenderer::bundled(),
    }
}
