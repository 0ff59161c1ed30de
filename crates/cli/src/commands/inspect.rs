//! Read-only view of the inputs both sizing strategies use

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use planner_lib::{
    ClusterApi, ClusterHealth, PlannerError, PlannerResult, TemplateOrchestrator, VolumeReport,
};

use crate::output::{color_status, format_gib, print_info, print_json, print_warning, OutputFormat};

/// Row for the sampled indices table
#[derive(Tabled)]
struct IndexRow {
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Primary Size")]
    size: String,
}

#[derive(Serialize)]
struct InspectReport {
    health: ClusterHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<VolumeReport>,
}

/// An empty catalog is reported, not treated as a failure
fn volume_or_none(result: PlannerResult<VolumeReport>) -> Result<Option<VolumeReport>> {
    match result {
        Ok(report) => Ok(Some(report)),
        Err(PlannerError::NoHistoricalData { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Show cluster health and the volume sample for a pattern
pub async fn inspect(
    cluster: &dyn ClusterApi,
    orchestrator: &TemplateOrchestrator,
    index_pattern: &str,
    format: OutputFormat,
) -> Result<()> {
    let health = cluster.cluster_health().await?;
    let volume = volume_or_none(orchestrator.inspect_volume(index_pattern).await)?;

    match format {
        OutputFormat::Json => print_json(&InspectReport { health, volume })?,
        OutputFormat::Table => {
            println!("{}", "Cluster".bold());
            println!("{}", "=".repeat(50));
            println!("Name:                   {}", health.cluster_name.cyan());
            println!("Status:                 {}", color_status(&health.status));
            println!("Nodes:                  {}", health.number_of_nodes);
            println!(
                "Data nodes:             {}  (shards by data nodes)",
                health.number_of_data_nodes.to_string().bold()
            );
            println!();

            println!("{}", format!("Volume for {}", index_pattern).bold());
            println!("{}", "-".repeat(50));
            let Some(report) = volume else {
                print_warning("No indices match this pattern; volume sizing is unavailable");
                return Ok(());
            };

            let rows: Vec<IndexRow> = report
                .sampled
                .iter()
                .map(|r| IndexRow {
                    index: r.index_name.clone(),
                    size: r.primary_store_size.clone().unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            println!("Sample window:          {} days", report.sample_window_days);
            println!("Total sampled:          {}", format_gib(report.total_gib));
            println!(
                "Average per day:        {}",
                format_gib(report.average_daily_gib)
            );
            print_info(&format!(
                "Volume-based recommendation: {} shard(s)",
                report.recommended.to_string().green().bold()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_lib::ShardCount;

    fn report() -> VolumeReport {
        VolumeReport {
            index_pattern: "logs_*".to_string(),
            sample_window_days: 7,
            sampled: Vec::new(),
            total_gib: 0.0,
            average_daily_gib: 0.0,
            recommended: ShardCount::ONE,
        }
    }

    #[test]
    fn test_no_historical_data_is_not_an_error() {
        let volume = volume_or_none(Err(PlannerError::NoHistoricalData {
            pattern: "logs_*".to_string(),
        }))
        .unwrap();
        assert!(volume.is_none());

        let json = serde_json::to_value(InspectReport {
            health: ClusterHealth {
                cluster_name: "search".to_string(),
                status: "green".to_string(),
                number_of_data_nodes: 3,
                number_of_nodes: 4,
            },
            volume,
        })
        .unwrap();
        assert!(json.get("volume").is_none());
        assert_eq!(json["health"]["number_of_data_nodes"], 3);
    }

    #[test]
    fn test_volume_report_passed_through() {
        let volume = volume_or_none(Ok(report())).unwrap().unwrap();
        assert_eq!(volume.recommended, ShardCount::ONE);
    }

    #[test]
    fn test_other_errors_propagate() {
        let err = volume_or_none(Err(PlannerError::ClusterUnavailable("503".to_string())))
            .unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
