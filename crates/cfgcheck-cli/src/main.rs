mod commands;
mod logging;
mod render;

use std::path::Path;
use std::process;

use cfgcheck_core::inventory::Inventory;
use cfgcheck_core::{scanner, validator, AppConfig, AuditEngine, DiskStore, ProgressReporter};
use clap::{CommandFactory, Parser};
use commands::{Cli, Commands};
use dotenv::dotenv;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = match cfgcheck_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };
    if let Some(inventory) = &args.inventory {
        config.inventory_path = inventory.clone();
    }
    if let Some(backup_dir) = &args.backup_dir {
        config.backup_dir = backup_dir.clone();
    }

    match args.command {
        Some(Commands::Audit) => {
            let engine = AuditEngine::new(config);
            let report = match engine.run(&TraceReporter) {
                Ok(report) => report,
                Err(err) => {
                    render::fail(&err.to_string());
                    error!("Error: {}", err);
                    process::exit(1);
                }
            };
            render::render_report(&report);
            if report.has_failures() {
                process::exit(1);
            }
        }
        Some(Commands::Hosts) => {
            let inventory = Inventory::load(&DiskStore, Path::new(&config.inventory_path))?;
            for host in inventory.host_set()? {
                println!("{}", host);
            }
        }
        Some(Commands::Artifacts) => run_artifacts(&config)?,
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

/// Narrates engine phases through tracing.
struct TraceReporter;

impl ProgressReporter for TraceReporter {
    fn on_inventory_loaded(&self, hosts: usize, duration_secs: f64) {
        info!("{} inventory hosts ({:.2}s)", hosts, duration_secs);
    }

    fn on_scan_complete(&self, artifacts: usize, duration_secs: f64) {
        info!("{} backup artifacts ({:.2}s)", artifacts, duration_secs);
    }

    fn on_validation_complete(&self, defects: usize, duration_secs: f64) {
        info!("{} validation defects ({:.2}s)", defects, duration_secs);
    }

    fn on_reconcile_complete(&self, missing: usize, orphans: usize, duration_secs: f64) {
        info!(
            "{} missing backups, {} orphan artifacts ({:.2}s)",
            missing, orphans, duration_secs
        );
    }
}

fn run_artifacts(config: &AppConfig) -> anyhow::Result<()> {
    let store = DiskStore;
    let artifacts = scanner::scan_artifacts(
        &store,
        Path::new(&config.backup_dir),
        &config.ignore_patterns,
    )?;
    let defects = validator::validate_artifacts(&store, &artifacts, &config.required_keywords);

    println!("Found {} backup file(s):", artifacts.len());
    for artifact in &artifacts {
        let mut notes = Vec::new();
        if defects.bad_names.contains(&artifact.file_name) {
            notes.push("bad name");
        }
        if defects.empty_files.contains(&artifact.file_name) {
            notes.push("empty");
        }
        if defects
            .basic_keywords
            .iter()
            .any(|d| d.file_name == artifact.file_name)
        {
            notes.push("missing markers");
        }
        if notes.is_empty() {
            println!(" - {} ({} bytes)", artifact.file_name, artifact.size);
        } else {
            println!(
                " - {} ({} bytes) [{}]",
                artifact.file_name,
                artifact.size,
                notes.join(", ")
            );
        }
    }
    Ok(())
}
