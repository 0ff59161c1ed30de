//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a GiB quantity
pub fn format_gib(gib: f64) -> String {
    if gib >= 1.0 {
        format!("{:.2}Gi", gib)
    } else if gib * 1024.0 >= 1.0 {
        format!("{:.2}Mi", gib * 1024.0)
    } else {
        format!("{:.2}Ki", gib * 1024.0 * 1024.0)
    }
}

/// Color cluster health status
pub fn color_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "green" => status.green().to_string(),
        "yellow" => status.yellow().to_string(),
        "red" => status.red().to_string(),
        _ => status.to_string(),
    }
}
