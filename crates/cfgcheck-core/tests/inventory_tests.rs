use std::fs;

use tempfile::tempdir;

use cfgcheck_core::inventory::Inventory;
use cfgcheck_core::{DiskStore, Error};

#[test]
fn test_load_from_disk() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("inventory.yml");
    fs::write(
        &path,
        "all:\n  children:\n    core:\n      hosts:\n        router1:\n        router2:\n",
    )
    .unwrap();

    let inventory = Inventory::load(&DiskStore, &path).unwrap();
    let hosts = inventory.host_set().unwrap();
    assert_eq!(
        hosts.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["router1", "router2"]
    );
}

#[test]
fn test_load_missing_file() {
    let tmp = tempdir().unwrap();
    let err = Inventory::load(&DiskStore, &tmp.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, Error::InventoryLoad(_)));
}

#[test]
fn test_load_unparseable_document() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("inventory.yml");
    fs::write(&path, "all: [not, a, group]\n").unwrap();

    let err = Inventory::load(&DiskStore, &path).unwrap_err();
    assert!(matches!(err, Error::InventoryLoad(_)));
}

// Union over the tree must not depend on how hosts are arranged into
// groups: the same hosts nested deeply or spread across siblings flatten to
// the same set.
#[test]
fn test_flattening_ignores_nesting_arrangement() {
    let deep = Inventory::parse(
        "\
all:
  children:
    a:
      children:
        b:
          children:
            c:
              hosts:
                router1:
                router2:
                router3:
",
    )
    .unwrap();
    let wide = Inventory::parse(
        "\
all:
  children:
    a:
      hosts:
        router2:
    b:
      hosts:
        router3:
  hosts:
    router1:
",
    )
    .unwrap();

    assert_eq!(deep.host_set().unwrap(), wide.host_set().unwrap());
}

#[test]
fn test_deeply_nested_inventory_terminates() {
    // 40 levels of distinct group names, one host at the bottom
    let mut doc = String::from("all:\n");
    let mut indent = String::from("  ");
    for level in 0..40 {
        doc.push_str(&format!("{}children:\n", indent));
        doc.push_str(&format!("{}  g{}:\n", indent, level));
        indent.push_str("    ");
    }
    doc.push_str(&format!("{}hosts:\n{}  deep1:\n", indent, indent));

    let inventory = Inventory::parse(&doc).unwrap();
    let hosts = inventory.host_set().unwrap();
    assert!(hosts.contains("deep1"));
}
