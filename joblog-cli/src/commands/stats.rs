//! Stats command handler

use anyhow::Result;
use colored::*;
use joblog_core::domain::stats::PerformanceStat;

use crate::config::Config;

/// Print per-category upload counters
pub async fn handle_stats_command(config: &Config) -> Result<()> {
    let stats = config.client().performance_stats().await?;

    if stats.is_empty() {
        println!("{}", "No performance statistics recorded.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Performance for {} categor(ies):", stats.len()).bold()
    );
    println!();
    for stat in &stats {
        print_stat(stat);
    }

    Ok(())
}

fn print_stat(stat: &PerformanceStat) {
    println!("  {} {}", "▸".cyan(), stat.category.bold());
    println!(
        "    Successful: {}",
        stat.successful_uploads.to_string().green()
    );
    println!("    Failed:     {}", stat.failed_uploads.to_string().red());
    if let Some(rate) = stat.success_rate() {
        println!("    Success:    {}", format!("{:.1}%", rate * 100.0).dimmed());
    }
    println!();
}
