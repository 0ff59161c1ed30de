//! Index template rendering
//!
//! The template definition is an external mustache resource with two
//! placeholders, `{{index_patterns}}` and `{{number_of_shards}}`. The
//! rendered text must be a JSON document; nothing else about its shape is
//! assumed here.

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ShardCount, TemplateDocument};
use std::path::PathBuf;
use tera::{Context, Tera};

/// Template shipped with the crate
pub const BUNDLED_TEMPLATE: &str = include_str!("../../../templates/index_template.mustache");

/// Where the template definition is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Bundled,
}

/// Renders index templates from a template definition
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    source: TemplateSource,
}

impl TemplateRenderer {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::File(path.into()),
        }
    }

    pub fn bundled() -> Self {
        Self {
            source: TemplateSource::Bundled,
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Render the document for a pattern and shard count
    ///
    /// The definition is read on every call.
    pub fn render(
        &self,
        index_pattern: &str,
        shard_count: ShardCount,
    ) -> PlannerResult<TemplateDocument> {
        match &self.source {
            TemplateSource::File(path) => {
                let definition = std::fs::read_to_string(path).map_err(|source| {
                    PlannerError::TemplateSourceUnavailable {
                        path: path.clone(),
                        source,
                    }
                })?;
                render_definition(&definition, index_pattern, shard_count)
            }
            TemplateSource::Bundled => {
                render_definition(BUNDLED_TEMPLATE, index_pattern, shard_count)
            }
        }
    }
}

/// Substitute the two placeholders and parse the result as JSON
///
/// The pattern is inserted JSON-escaped, so its placeholder belongs inside a
/// JSON string literal.
pub fn render_definition(
    definition: &str,
    index_pattern: &str,
    shard_count: ShardCount,
) -> PlannerResult<TemplateDocument> {
    let quoted = serde_json::Value::from(index_pattern).to_string();
    let mut context = Context::new();
    context.insert("index_patterns", &quoted[1..quoted.len() - 1]);
    context.insert("number_of_shards", &shard_count.get());

    let rendered = Tera::one_off(&mustache_tags_to_tera(definition)?, &context, false)?;
    let body: serde_json::Value = serde_json::from_str(&rendered).map_err(|e| {
        PlannerError::TemplateRender(format!("rendered template is not valid JSON: {}", e))
    })?;

    Ok(TemplateDocument::new(body))
}

/// Rewrite mustache variable tags into tera expressions
///
/// `{{x}}`, `{{{x}}}` and `{{&x}}` become `{{ x }}`; `{{! ... }}` comments are
/// dropped. Sections are not supported and fail in the tera parser.
fn mustache_tags_to_tera(definition: &str) -> PlannerResult<String> {
    let unclosed = |tag: &str| {
        let head: String = tag.chars().take(24).collect();
        PlannerError::TemplateRender(format!("unclosed tag near {:?}", head))
    };

    let mut out = String::with_capacity(definition.len());
    let mut rest = definition;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tag = &rest[start..];

        let (comment, close, body) = if let Some(body) = tag.strip_prefix("{{{") {
            (false, "}}}", body)
        } else if let Some(body) = tag.strip_prefix("{{!") {
            (true, "}}", body)
        } else {
            (false, "}}", &tag[2..])
        };
        let end = body.find(close).ok_or_else(|| unclosed(tag))?;

        if !comment {
            let variable = body[..end].trim().trim_start_matches('&').trim();
            out.push_str("{{ ");
            out.push_str(variable);
            out.push_str(" }}");
        }
        rest = &body[end + close.len()..];
    }
    out.push_str(rest);
    Ok(out)
}
