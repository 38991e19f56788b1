use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::error::Error;
use crate::store::ArtifactStore;

/// Extension a file must carry to count as a backup artifact.
pub const ARTIFACT_EXTENSION: &str = "cfg";

/// One backup file discovered in the scan directory. Immutable after
/// discovery; the scanner never creates, deletes, or modifies artifacts.
#[derive(Debug, Clone)]
pub struct BackupArtifact {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

/// List `.cfg` artifacts in `dir`, skipping entries matching any ignore
/// glob. A missing directory and a directory with zero matching files are
/// distinct fatal conditions: the first means the backup job never ran
/// here, the second that it ran and produced nothing.
pub fn scan_artifacts(
    store: &dyn ArtifactStore,
    dir: &Path,
    ignore_globs: &[String],
) -> Result<Vec<BackupArtifact>, Error> {
    if !store.is_dir(dir) {
        return Err(Error::ScanDirectoryMissing(dir.to_path_buf()));
    }

    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let mut artifacts = Vec::new();
    for path in store.list_dir(dir)? {
        if path.extension().and_then(|e| e.to_str()) != Some(ARTIFACT_EXTENSION) {
            continue;
        }
        if ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(&path))
        {
            continue;
        }
        let file_name = match path.file_name().and_then(|f| f.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let size = store.file_size(&path)?;
        artifacts.push(BackupArtifact {
            path,
            file_name,
            size,
        });
    }

    if artifacts.is_empty() {
        return Err(Error::NoArtifactsFound(dir.to_path_buf()));
    }

    debug!("{} artifacts found in {}", artifacts.len(), dir.display());
    Ok(artifacts)
}

/// Host identifier derived from an artifact filename: the token before the
/// first underscore. Hosts whose own identifier contains an underscore get
/// truncated at the first one; this mirrors the backup job's naming and is
/// a known limitation, kept as-is. Filenames with no underscore (or nothing
/// before it) yield `None`; the name-shape check reports those.
pub fn host_for(file_name: &str) -> Option<&str> {
    match file_name.split_once('_') {
        Some((host, _)) if !host.is_empty() => Some(host),
        _ => None,
    }
}

/// Group artifact filenames by their derived host. Artifacts with no
/// derivable host are excluded from the mapping; multiple artifacts for the
/// same host are all retained so repeated or stale backups stay visible.
pub fn artifacts_by_host(artifacts: &[BackupArtifact]) -> BTreeMap<String, Vec<String>> {
    let mut by_host: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for artifact in artifacts {
        if let Some(host) = host_for(&artifact.file_name) {
            by_host
                .entry(host.to_string())
                .or_default()
                .push(artifact.file_name.clone());
        }
    }
    by_host
}
