/// Trait for reporting audit progress.
///
/// The CLI implements this with tracing output. All methods have default
/// no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_inventory_loaded(&self, _hosts: usize, _duration_secs: f64) {}
    fn on_scan_complete(&self, _artifacts: usize, _duration_secs: f64) {}
    fn on_validation_complete(&self, _defects: usize, _duration_secs: f64) {}
    fn on_reconcile_complete(&self, _missing: usize, _orphans: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
