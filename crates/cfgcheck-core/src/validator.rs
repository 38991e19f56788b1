use lazy_static::lazy_static;
use regex::Regex;

use crate::scanner::BackupArtifact;
use crate::store::ArtifactStore;

lazy_static! {
    // <hostToken>_<YYYYMMDD>_<HHMMSS>.cfg
    static ref ARTIFACT_NAME: Regex =
        Regex::new(r"^[\w-]+_\d{8}_\d{6}\.cfg$").expect("artifact name pattern");
}

/// A file missing one or more required content markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDefect {
    pub file_name: String,
    pub missing: Vec<String>,
}

/// Validation defects grouped by category. Categories are independent; one
/// artifact can appear in several at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectReport {
    pub bad_names: Vec<String>,
    pub empty_files: Vec<String>,
    pub basic_keywords: Vec<KeywordDefect>,
}

impl DefectReport {
    pub fn is_clean(&self) -> bool {
        self.bad_names.is_empty() && self.empty_files.is_empty() && self.basic_keywords.is_empty()
    }

    pub fn defect_count(&self) -> usize {
        self.bad_names.len() + self.empty_files.len() + self.basic_keywords.len()
    }
}

/// Whether `file_name` matches the backup naming grammar.
pub fn name_is_valid(file_name: &str) -> bool {
    ARTIFACT_NAME.is_match(file_name)
}

/// Run every check over every artifact, accumulating failures by category.
/// Checks never short-circuit, so one run surfaces every defect at once.
/// The keyword check is best-effort: unreadable content counts as missing
/// all markers rather than aborting the run.
pub fn validate_artifacts(
    store: &dyn ArtifactStore,
    artifacts: &[BackupArtifact],
    required_keywords: &[String],
) -> DefectReport {
    let mut report = DefectReport::default();

    for artifact in artifacts {
        if !name_is_valid(&artifact.file_name) {
            report.bad_names.push(artifact.file_name.clone());
        }

        if artifact.size == 0 {
            report.empty_files.push(artifact.file_name.clone());
        }

        if !required_keywords.is_empty() {
            let content = store.read_to_string(&artifact.path).unwrap_or_default();
            let missing: Vec<String> = required_keywords
                .iter()
                .filter(|keyword| !content.contains(keyword.as_str()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                report.basic_keywords.push(KeywordDefect {
                    file_name: artifact.file_name.clone(),
                    missing,
                });
            }
        }
    }

    report
}
