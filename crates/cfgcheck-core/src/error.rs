use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Inventory error: {0}")]
    InventoryLoad(String),

    #[error("Malformed inventory: group '{0}' is listed as its own descendant")]
    MalformedInventory(String),

    #[error("Backup directory does not exist: {}", .0.display())]
    ScanDirectoryMissing(PathBuf),

    #[error("No backup artifacts found in {}", .0.display())]
    NoArtifactsFound(PathBuf),
}
