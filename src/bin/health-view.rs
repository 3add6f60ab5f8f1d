//! # Health View
//!
//! Command-line tool that runs an instance listing through the health view
//! and prints the healthy and unhealthy groups.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use health_view_core::{
    instances_from_json, logging, ConfigLoader, HealthViewConfig, HealthViewModel, Instance,
    Query, ViewSnapshot,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "health-view")]
#[command(about = "Filter service instances and split them by health")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// JSON file holding an array of instances
    instances: PathBuf,

    /// Node name prefix (case-insensitive)
    #[arg(short = 's', long = "name")]
    name_filter: Option<String>,

    /// Check status an instance must report at least once
    #[arg(long)]
    status: Option<String>,

    /// Configuration file (defaults to config/ with environment overrides)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("health view failed: {e:#}");
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    logging::init_with_config(&config.logging);

    let payload = std::fs::read_to_string(&cli.instances)
        .with_context(|| format!("reading {}", cli.instances.display()))?;
    let source = instances_from_json(&payload)
        .with_context(|| format!("parsing {}", cli.instances.display()))?;

    let view = HealthViewModel::from_config(&config);
    let query = resolve_query(&config.default_query, cli);
    view.set_source(source);
    view.set_query(query);

    let snapshot = view.snapshot();
    info!(
        generation = snapshot.generation,
        filtered = snapshot.filtered().len(),
        "health view computed"
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*snapshot)?),
        OutputFormat::Table => print_table(&snapshot, &config),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<HealthViewConfig> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => ConfigLoader::load()?,
    };
    Ok(config)
}

/// Command-line filters override the configured default query
fn resolve_query(default_query: &Query, cli: &Cli) -> Query {
    let mut query = default_query.clone();
    if let Some(name_filter) = &cli.name_filter {
        query = query.with_name_filter(name_filter.as_str());
    }
    if let Some(status) = &cli.status {
        query = query.with_status_filter(status.as_str());
    }
    query
}

fn print_table(snapshot: &ViewSnapshot, config: &HealthViewConfig) {
    let summary = snapshot.summary();
    println!(
        "{} instances ({} healthy, {} unhealthy)",
        summary.total, summary.healthy, summary.unhealthy
    );

    // First column width is the node column; the rest hold check statuses
    let node_width = config
        .layout
        .columns
        .first()
        .map_or(25, |&w| usize::from(w));

    print_group("Unhealthy", snapshot.unhealthy(), node_width);
    print_group("Healthy", snapshot.healthy(), node_width);
}

fn print_group(title: &str, instances: &[Instance], node_width: usize) {
    println!();
    println!("{title}");
    if instances.is_empty() {
        println!("  (none)");
        return;
    }
    for instance in instances {
        let statuses: Vec<&str> = instance
            .checks
            .iter()
            .map(|check| check.status.as_str())
            .collect();
        println!(
            "  {:<node_width$} {}",
            instance.node_name().unwrap_or("-"),
            statuses.join(", ")
        );
    }
}
