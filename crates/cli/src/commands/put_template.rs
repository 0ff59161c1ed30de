//! Create or replace an index template

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use planner_lib::{ShardSizingRequest, TemplateOrchestrator};

use crate::output::{print_json, print_success, print_warning, OutputFormat};

/// Row for the template summary table
#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Template")]
    template_id: String,
    #[tabled(rename = "Pattern")]
    index_pattern: String,
    #[tabled(rename = "Shards")]
    shards: u32,
    #[tabled(rename = "Source")]
    source: String,
}

fn summary_table(row: TemplateRow) -> String {
    tabled::Table::new([row])
        .with(tabled::settings::Style::rounded())
        .to_string()
}

/// Size, render and submit a template
///
/// With `dry_run` the document is rendered and printed but not submitted.
pub async fn put_template(
    orchestrator: &TemplateOrchestrator,
    request: &ShardSizingRequest,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    if dry_run {
        let plan = orchestrator.plan(request).await?;

        match format {
            OutputFormat::Json => print_json(&plan)?,
            OutputFormat::Table => {
                print_warning("Dry-run mode - template not submitted");
                println!(
                    "{}",
                    summary_table(TemplateRow {
                        template_id: plan.template_id.clone(),
                        index_pattern: plan.index_pattern.clone(),
                        shards: plan.decision.shard_count.get(),
                        source: plan.decision.source.to_string(),
                    })
                );
                println!("\nDocument that would be submitted:");
                println!("{}", serde_json::to_string_pretty(plan.document.as_json())?);
            }
        }
        return Ok(());
    }

    let outcome = orchestrator.put_templates(request).await?;

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Table => {
            print_success(&format!(
                "Template {} created or updated",
                outcome.template_id.cyan()
            ));
            println!(
                "{}",
                summary_table(TemplateRow {
                    template_id: outcome.template_id.clone(),
                    index_pattern: outcome.index_pattern.clone(),
                    shards: outcome.shard_count.get(),
                    source: outcome.strategy_used.to_string(),
                })
            );
            if !outcome.acknowledged {
                print_warning("Cluster did not acknowledge the template");
            }
            println!("Response: {}", outcome.response);
            println!(
                "Applied at: {}",
                outcome
                    .applied_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .dimmed()
            );
        }
    }

    Ok(())
}
