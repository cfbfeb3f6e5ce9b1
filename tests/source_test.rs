use kickstart::source::{DiskTree, MemoryTree, SourceTree, TreeEntry};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_memory_tree_implies_ancestor_directories() {
    let tree = MemoryTree::new().file("apps/api/main.go", "api").file("README.md", "hi");

    let entries = tree.entries().unwrap();
    assert!(entries.contains(&TreeEntry::Dir("apps".to_string())));
    assert!(entries.contains(&TreeEntry::Dir("apps/api".to_string())));
    assert!(entries.contains(&TreeEntry::File("apps/api/main.go".to_string())));
    assert!(entries.contains(&TreeEntry::File("README.md".to_string())));
}

#[test]
fn test_memory_tree_entries_sorted_parents_first() {
    let tree = MemoryTree::new().file("b/z.txt", "z").file("b/a.txt", "a").file("a.txt", "root");

    let entries = tree.entries().unwrap();
    let paths: Vec<String> = entries.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, vec!["a.txt", "b", "b/a.txt", "b/z.txt"]);
}

#[test]
fn test_memory_tree_read() {
    let tree = MemoryTree::new().file("a.txt", "content");

    assert_eq!(tree.read("a.txt").unwrap(), b"content");
    assert!(tree.read("missing.txt").is_err());
}

#[test]
fn test_disk_tree_walks_relative_paths() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("apps/api")).unwrap();
    fs::write(tmp.path().join("apps/api/main.go"), "api").unwrap();
    fs::write(tmp.path().join("README.md"), "hi").unwrap();

    let tree = DiskTree::new(tmp.path()).unwrap();
    let entries = tree.entries().unwrap();

    assert!(entries.contains(&TreeEntry::Dir("apps".to_string())));
    assert!(entries.contains(&TreeEntry::File("apps/api/main.go".to_string())));
    assert!(entries.contains(&TreeEntry::File("README.md".to_string())));
    assert_eq!(tree.read("apps/api/main.go").unwrap(), b"api");
}

#[test]
fn test_disk_tree_rejects_missing_root() {
    let tmp = TempDir::new().unwrap();
    assert!(DiskTree::new(tmp.path().join("nope")).is_err());
}
