use cfgcheck_core::AuditReport;
use colored::*;

pub fn pass(msg: &str) {
    println!("{} {}", "[PASS]".green(), msg);
}

pub fn fail(msg: &str) {
    println!("{} {}", "[FAIL]".red(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "[WARN]".yellow(), msg);
}

/// Render the audit report as one console line per check category, with a
/// severity verdict at the end. Output is plain enough for CI capture.
pub fn render_report(report: &AuditReport) {
    println!(
        "Backup audit — {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    pass(&format!("inventory: {} hosts", report.hosts.len()));
    pass(&format!("artifacts: {} found", report.artifacts.len()));

    if report.defects.bad_names.is_empty() {
        pass("file names match backup grammar");
    } else {
        fail(&format!(
            "bad names ({}): {}",
            report.defects.bad_names.len(),
            report.defects.bad_names.join(", ")
        ));
    }

    if report.defects.empty_files.is_empty() {
        pass("no empty backup files");
    } else {
        fail(&format!(
            "empty files ({}): {}",
            report.defects.empty_files.len(),
            report.defects.empty_files.join(", ")
        ));
    }

    if report.defects.basic_keywords.is_empty() {
        pass("required content markers present");
    } else {
        let details: Vec<String> = report
            .defects
            .basic_keywords
            .iter()
            .map(|d| format!("{} (missing {})", d.file_name, d.missing.join(", ")))
            .collect();
        let msg = format!(
            "content markers ({}): {}",
            details.len(),
            details.join("; ")
        );
        if report.strict_keywords {
            fail(&msg);
        } else {
            warn(&msg);
        }
    }

    if report.reconciliation.missing_hosts.is_empty() {
        pass("every inventory host has a backup");
    } else {
        fail(&format!(
            "missing backups ({}): {}",
            report.reconciliation.missing_hosts.len(),
            report.reconciliation.missing_hosts.join(", ")
        ));
    }

    if report.reconciliation.orphan_artifacts.is_empty() {
        pass("no orphan artifacts");
    } else {
        warn(&format!(
            "orphan artifacts ({}): {}",
            report.reconciliation.orphan_artifacts.len(),
            report.reconciliation.orphan_artifacts.join(", ")
        ));
    }

    println!();
    if report.has_failures() {
        fail("backup audit failed");
    } else if report.has_warnings() {
        warn("backup audit passed with warnings");
    } else {
        pass("backup audit passed");
    }
}
