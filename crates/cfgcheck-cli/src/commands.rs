use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cfgcheck")]
#[command(about = "Audit network-device config backups against inventory", long_about = None)]
pub struct Cli {
    /// Inventory document path (overrides Config.toml)
    #[arg(long, global = true)]
    pub inventory: Option<String>,

    /// Backup directory path (overrides Config.toml)
    #[arg(long, global = true)]
    pub backup_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full backup audit: inventory, scan, validate, reconcile
    Audit,
    /// Print the flattened inventory host set
    Hosts,
    /// List discovered backup artifacts with their validation verdicts
    Artifacts,
    /// Print configuration values
    PrintConfig,
}
