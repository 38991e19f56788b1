use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Error;
use crate::inventory::Inventory;
use crate::progress::ProgressReporter;
use crate::reconcile::{self, Reconciliation};
use crate::scanner::{self, BackupArtifact};
use crate::store::{ArtifactStore, DiskStore};
use crate::validator::{self, DefectReport};

pub struct AuditEngine {
    config: AppConfig,
}

/// Everything one audit run produced. Built fresh on each run and never
/// persisted; two runs over unchanged inputs yield the same findings.
#[derive(Debug)]
pub struct AuditReport {
    pub generated_at: DateTime<Local>,
    pub hosts: BTreeSet<String>,
    pub artifacts: Vec<BackupArtifact>,
    pub by_host: BTreeMap<String, Vec<String>>,
    pub defects: DefectReport,
    pub reconciliation: Reconciliation,
    pub strict_keywords: bool,
    pub inventory_duration: Duration,
    pub scan_duration: Duration,
    pub validate_duration: Duration,
    pub reconcile_duration: Duration,
}

impl AuditReport {
    /// FAIL-level findings: missing backups, bad names, empty files, and
    /// (only under `strict_keywords`) missing content markers. Orphan
    /// artifacts never fail a run.
    pub fn has_failures(&self) -> bool {
        !self.reconciliation.missing_hosts.is_empty()
            || !self.defects.bad_names.is_empty()
            || !self.defects.empty_files.is_empty()
            || (self.strict_keywords && !self.defects.basic_keywords.is_empty())
    }

    /// WARN-level findings: orphan artifacts, plus keyword misses when they
    /// are not promoted to failures.
    pub fn has_warnings(&self) -> bool {
        !self.reconciliation.orphan_artifacts.is_empty()
            || (!self.strict_keywords && !self.defects.basic_keywords.is_empty())
    }
}

impl AuditEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full audit pipeline against the real filesystem.
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<AuditReport, Error> {
        self.run_with_store(&DiskStore, reporter)
    }

    /// Run the full audit pipeline:
    /// 1. Load the inventory and flatten the group tree into a host set
    /// 2. Scan the backup directory for artifacts
    /// 3. Validate every artifact (name shape, emptiness, content markers)
    /// 4. Reconcile inventory hosts against artifact-derived hosts
    pub fn run_with_store(
        &self,
        store: &dyn ArtifactStore,
        reporter: &dyn ProgressReporter,
    ) -> Result<AuditReport, Error> {
        let inventory_path = PathBuf::from(&self.config.inventory_path);
        let backup_dir = PathBuf::from(&self.config.backup_dir);

        // Phase 1: Inventory
        info!("Loading inventory {}...", inventory_path.display());
        let inventory_start = Instant::now();
        let inventory = Inventory::load(store, &inventory_path)?;
        let hosts = inventory.host_set()?;
        let inventory_duration = inventory_start.elapsed();
        debug!(
            "Inventory loaded in {:.2}s — {} hosts",
            inventory_duration.as_secs_f64(),
            hosts.len(),
        );
        reporter.on_inventory_loaded(hosts.len(), inventory_duration.as_secs_f64());

        // Phase 2: Scan
        info!("Scanning backup artifacts in {}...", backup_dir.display());
        let scan_start = Instant::now();
        let artifacts =
            scanner::scan_artifacts(store, &backup_dir, &self.config.ignore_patterns)?;
        let scan_duration = scan_start.elapsed();
        debug!(
            "Scan completed in {:.2}s — {} artifacts",
            scan_duration.as_secs_f64(),
            artifacts.len(),
        );
        reporter.on_scan_complete(artifacts.len(), scan_duration.as_secs_f64());

        // Phase 3: Validate
        info!("Validating artifacts...");
        let validate_start = Instant::now();
        let defects =
            validator::validate_artifacts(store, &artifacts, &self.config.required_keywords);
        let validate_duration = validate_start.elapsed();
        debug!(
            "Validation completed in {:.2}s — {} defects",
            validate_duration.as_secs_f64(),
            defects.defect_count(),
        );
        reporter.on_validation_complete(defects.defect_count(), validate_duration.as_secs_f64());

        // Phase 4: Reconcile
        info!("Reconciling inventory against artifacts...");
        let reconcile_start = Instant::now();
        let by_host = scanner::artifacts_by_host(&artifacts);
        let reconciliation = reconcile::reconcile(&hosts, &by_host);
        let reconcile_duration = reconcile_start.elapsed();
        debug!(
            "Reconciliation completed in {:.2}s — {} missing, {} orphans",
            reconcile_duration.as_secs_f64(),
            reconciliation.missing_hosts.len(),
            reconciliation.orphan_artifacts.len(),
        );
        reporter.on_reconcile_complete(
            reconciliation.missing_hosts.len(),
            reconciliation.orphan_artifacts.len(),
            reconcile_duration.as_secs_f64(),
        );

        Ok(AuditReport {
            generated_at: Local::now(),
            hosts,
            artifacts,
            by_host,
            defects,
            reconciliation,
            strict_keywords: self.config.strict_keywords,
            inventory_duration,
            scan_duration,
            validate_duration,
            reconcile_duration,
        })
    }
}
