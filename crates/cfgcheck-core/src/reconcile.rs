use std::collections::{BTreeMap, BTreeSet};

/// Outcome of comparing the inventory host set against the artifact-derived
/// host mapping, in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Inventory hosts with no artifact at all (valid or not). FAIL
    /// severity: a declared host never produced a backup.
    pub missing_hosts: Vec<String>,
    /// Artifacts attributed to hosts the inventory does not declare. WARN
    /// severity: the inventory may simply lag reality.
    pub orphan_artifacts: Vec<String>,
}

/// Pure set difference in both directions. Reads its inputs, mutates
/// nothing, touches no files. Output ordering is lexical in both lists;
/// multiple artifacts for one orphan host are all retained.
pub fn reconcile(
    hosts: &BTreeSet<String>,
    by_host: &BTreeMap<String, Vec<String>>,
) -> Reconciliation {
    let missing_hosts: Vec<String> = hosts
        .iter()
        .filter(|host| !by_host.contains_key(host.as_str()))
        .cloned()
        .collect();

    let mut orphan_artifacts: Vec<String> = by_host
        .iter()
        .filter(|(host, _)| !hosts.contains(host.as_str()))
        .flat_map(|(_, files)| files.iter().cloned())
        .collect();
    orphan_artifacts.sort();

    Reconciliation {
        missing_hosts,
        orphan_artifacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_set(hosts: &[&str]) -> BTreeSet<String> {
        hosts.iter().map(|h| h.to_string()).collect()
    }

    fn mapping(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(host, files)| {
                (
                    host.to_string(),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_all_hosts_backed_up() {
        let result = reconcile(
            &host_set(&["router1"]),
            &mapping(&[("router1", &["router1_20240615_093000.cfg"])]),
        );
        assert!(result.missing_hosts.is_empty());
        assert!(result.orphan_artifacts.is_empty());
    }

    #[test]
    fn test_missing_hosts_sorted() {
        let result = reconcile(
            &host_set(&["router2", "router1", "router3"]),
            &mapping(&[("router2", &["router2_20240615_093000.cfg"])]),
        );
        assert_eq!(result.missing_hosts, vec!["router1", "router3"]);
    }

    #[test]
    fn test_orphans_keep_every_artifact() {
        let result = reconcile(
            &host_set(&["router1"]),
            &mapping(&[
                ("router1", &["router1_20240615_093000.cfg"]),
                (
                    "switch9",
                    &[
                        "switch9_20240616_093000.cfg",
                        "switch9_20240615_093000.cfg",
                    ],
                ),
            ]),
        );
        assert!(result.missing_hosts.is_empty());
        assert_eq!(
            result.orphan_artifacts,
            vec![
                "switch9_20240615_093000.cfg",
                "switch9_20240616_093000.cfg",
            ]
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let hosts = host_set(&["router1", "router2"]);
        let by_host = mapping(&[("router1", &["router1_20240615_093000.cfg"])]);
        let first = reconcile(&hosts, &by_host);
        let second = reconcile(&hosts, &by_host);
        assert_eq!(first, second);
    }
}
