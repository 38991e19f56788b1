use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::store::ArtifactStore;

/// One group in the inventory document: direct hosts plus nested child
/// groups, both optional. Host metadata values are carried but unused here.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryNode {
    #[serde(default)]
    pub hosts: Option<BTreeMap<String, serde_yaml::Value>>,
    #[serde(default)]
    pub children: Option<BTreeMap<String, Option<InventoryNode>>>,
}

/// A parsed inventory, rooted at the conventional `all` group.
#[derive(Debug, Clone)]
pub struct Inventory {
    root: Option<InventoryNode>,
}

impl Inventory {
    /// Load and parse the inventory document at `path`.
    pub fn load(store: &dyn ArtifactStore, path: &Path) -> Result<Inventory, Error> {
        if !store.exists(path) {
            return Err(Error::InventoryLoad(format!(
                "inventory file not found: {}",
                path.display()
            )));
        }
        let raw = store.read_to_string(path).map_err(|e| {
            Error::InventoryLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&raw)
    }

    /// Parse an inventory document from a string. The document root must be
    /// a mapping containing an `all` group; `all:` with no body is a valid,
    /// empty inventory.
    pub fn parse(raw: &str) -> Result<Inventory, Error> {
        let doc: BTreeMap<String, Option<InventoryNode>> = serde_yaml::from_str(raw)
            .map_err(|e| Error::InventoryLoad(format!("invalid inventory document: {e}")))?;
        match doc.get("all") {
            Some(root) => Ok(Inventory { root: root.clone() }),
            None => Err(Error::InventoryLoad(
                "inventory document has no 'all' root group".to_string(),
            )),
        }
    }

    /// Flatten the group tree into the set of all reachable host
    /// identifiers. Depth-first union; set semantics deduplicate hosts that
    /// appear under several groups.
    ///
    /// A group name reappearing among its own descendants would make a
    /// naive walk recurse forever, so the traversal tracks the group-name
    /// path from the root and rejects such input as `MalformedInventory`.
    pub fn host_set(&self) -> Result<BTreeSet<String>, Error> {
        let mut hosts = BTreeSet::new();
        if let Some(root) = &self.root {
            let mut path = vec!["all".to_string()];
            collect_hosts(root, &mut path, &mut hosts)?;
        }
        Ok(hosts)
    }
}

fn collect_hosts(
    node: &InventoryNode,
    path: &mut Vec<String>,
    acc: &mut BTreeSet<String>,
) -> Result<(), Error> {
    if let Some(hosts) = &node.hosts {
        acc.extend(hosts.keys().cloned());
    }
    if let Some(children) = &node.children {
        for (name, child) in children {
            let Some(child) = child else {
                // empty group, nothing to descend into
                continue;
            };
            if path.iter().any(|seen| seen == name) {
                return Err(Error::MalformedInventory(name.clone()));
            }
            path.push(name.clone());
            collect_hosts(child, path, acc)?;
            path.pop();
        }
    }
    Ok(())
}
