use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GOOD_CONTENT: &str = "hostname R1\ninterface Gi0\nversion 1\n";

/// Write an inventory document plus a configs/ backup directory into an
/// isolated temp dir the command runs in.
fn setup(inventory: &str, files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(tmp.path().join("inventory.yml"), inventory).expect("write inventory");
    let configs = tmp.path().join("configs");
    fs::create_dir_all(&configs).expect("create configs dir");
    for (file_name, content) in files {
        fs::write(configs.join(file_name), content).expect("write artifact");
    }
    tmp
}

fn cfgcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cfgcheck").expect("binary built");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn audit_passes_on_clean_backups() {
    let tmp = setup(
        "all:\n  hosts:\n    router1:\n",
        &[("router1_20240615_093000.cfg", GOOD_CONTENT)],
    );

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS] backup audit passed"));
}

#[test]
fn audit_fails_when_backup_missing() {
    let tmp = setup(
        "all:\n  hosts:\n    router1:\n    router2:\n",
        &[("router1_20240615_093000.cfg", GOOD_CONTENT)],
    );

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing backups (1): router2"));
}

#[test]
fn orphan_artifacts_warn_without_failing() {
    let tmp = setup(
        "all:\n  hosts:\n    router1:\n",
        &[
            ("router1_20240615_093000.cfg", GOOD_CONTENT),
            ("switch9_20240615_093000.cfg", GOOD_CONTENT),
        ],
    );

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("orphan artifacts (1): switch9_20240615_093000.cfg")
                .and(predicate::str::contains("backup audit passed with warnings")),
        );
}

#[test]
fn audit_reports_every_defect_in_one_run() {
    let tmp = setup(
        "all:\n  hosts:\n    router1:\n    router3:\n",
        &[
            ("router1_20240615_093000.cfg", GOOD_CONTENT),
            ("router3_20240615_093000.cfg", ""),
            ("badname.cfg", GOOD_CONTENT),
        ],
    );

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("bad names (1): badname.cfg")
                .and(predicate::str::contains(
                    "empty files (1): router3_20240615_093000.cfg",
                )),
        );
}

#[test]
fn missing_backup_dir_is_fatal() {
    let tmp = setup("all:\n  hosts:\n    router1:\n", &[]);
    fs::remove_dir_all(tmp.path().join("configs")).unwrap();

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Backup directory does not exist"));
}

#[test]
fn empty_backup_dir_is_a_distinct_failure() {
    let tmp = setup("all:\n  hosts:\n    router1:\n", &[]);

    cfgcheck(tmp.path())
        .args(["audit", "--inventory", "inventory.yml", "--backup-dir", "configs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No backup artifacts found"));
}

#[test]
fn hosts_lists_flattened_inventory() {
    let tmp = setup(
        "all:\n  children:\n    core:\n      hosts:\n        router2:\n        router1:\n",
        &[],
    );

    cfgcheck(tmp.path())
        .args(["hosts", "--inventory", "inventory.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("router1\nrouter2\n"));
}

#[test]
fn artifacts_lists_discovered_files_with_verdicts() {
    let tmp = setup(
        "all:\n  hosts:\n    router1:\n",
        &[
            ("router1_20240615_093000.cfg", GOOD_CONTENT),
            ("badname.cfg", GOOD_CONTENT),
        ],
    );

    cfgcheck(tmp.path())
        .args(["artifacts", "--backup-dir", "configs"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Found 2 backup file(s):")
                .and(predicate::str::contains("badname.cfg"))
                .and(predicate::str::contains("[bad name]")),
        );
}
