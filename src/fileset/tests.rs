//! Tests for file collection resolution

use super::api::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "// test\n").unwrap();
    fs::canonicalize(path).unwrap()
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "src/sv/top.sv");
    touch(dir.path(), "src/sv/uart/uart_pkg.sv");
    touch(dir.path(), "src/sv/uart/dummy.sv");
    touch(dir.path(), "src/sv/uart/uart_defines.svh");
    touch(dir.path(), "src/sv/dummy.sv");
    dir
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_no_patterns_includes_everything() {
    let dir = project();
    let set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    assert_eq!(set.resolve().unwrap().len(), 5);
}

#[test]
fn test_resolution_is_sorted_and_idempotent() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    set.include("**/*.sv").unwrap();
    set.exclude("**/uart_*.sv").unwrap();

    let first = set.resolve().unwrap();
    let second = set.resolve().unwrap();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn test_exclude_removes_exactly_matching_files() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    let before = set.resolve().unwrap();

    set.exclude("**/dummy.sv").unwrap();
    let after = set.resolve().unwrap();

    let removed: Vec<_> = before.iter().filter(|p| !after.contains(p)).collect();
    assert_eq!(removed.len(), 2);
    assert!(removed
        .iter()
        .all(|p| p.file_name().unwrap() == "dummy.sv"));
    assert!(after.iter().all(|p| before.contains(p)));
}

#[test]
fn test_includes_form_a_union() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    set.include("top.sv").unwrap();
    set.include("**/*.svh").unwrap();
    assert_eq!(
        names(&set.resolve().unwrap()),
        vec!["top.sv", "uart_defines.svh"]
    );
}

#[test]
fn test_exclude_wins_over_include() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    set.exclude("**/dummy.sv").unwrap();
    set.include("**/dummy.sv").unwrap();
    assert!(set.resolve().unwrap().is_empty());
}

#[test]
fn test_overlapping_roots_are_deduplicated() {
    let dir = project();
    let set = FileCollectionSet::with_roots(dir.path(), ["src/sv", "src/sv/uart", "src/./sv"]);
    assert_eq!(set.resolve().unwrap().len(), 5);
}

#[test]
fn test_missing_root_resolves_to_nothing() {
    let dir = TempDir::new().unwrap();
    let set = FileCollectionSet::with_roots(dir.path(), ["src/main/sv"]);
    assert!(set.resolve().unwrap().is_empty());
    assert!(set.source_directories().unwrap().is_empty());
}

#[test]
fn test_file_root_contributes_itself() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv/top.sv"]);
    set.include("*.sv").unwrap();
    assert_eq!(names(&set.resolve().unwrap()), vec!["top.sv"]);
}

#[test]
fn test_resolution_sees_filesystem_changes() {
    let dir = project();
    let set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    assert_eq!(set.resolve().unwrap().len(), 5);

    touch(dir.path(), "src/sv/added.sv");
    assert_eq!(set.resolve().unwrap().len(), 6);

    fs::remove_file(dir.path().join("src/sv/top.sv")).unwrap();
    let resolved = set.resolve().unwrap();
    assert_eq!(resolved.len(), 5);
    assert!(!names(&resolved).contains(&"top.sv".to_string()));
}

#[test]
fn test_set_src_dirs_replaces_earlier_roots() {
    let dir = project();
    touch(dir.path(), "rtl/core.sv");
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    set.set_src_dirs(["rtl"]);
    assert_eq!(names(&set.resolve().unwrap()), vec!["core.sv"]);
}

#[test]
fn test_invalid_pattern_is_reported_and_not_recorded() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    let err = set.exclude("[broken").unwrap_err();
    assert!(matches!(err, FileSetError::InvalidPattern { ref pattern, .. } if pattern == "[broken"));
    assert_eq!(set.operations().len(), 1);
}

#[test]
fn test_order_hint_moves_files_first_and_last() {
    let dir = project();
    let mut set = FileCollectionSet::with_roots(dir.path(), ["src/sv"]);
    set.include("**/*.sv").unwrap();
    set.order_first("**/*_pkg.sv").unwrap();
    set.order_last("top.sv").unwrap();

    let ordered = names(&set.resolve_ordered().unwrap());
    assert_eq!(ordered.first().unwrap(), "uart_pkg.sv");
    assert_eq!(ordered.last().unwrap(), "top.sv");
    assert_eq!(ordered.len(), 4);
}

#[test]
fn test_source_directories_only_lists_existing_dirs() {
    let dir = project();
    let set = FileCollectionSet::with_roots(dir.path(), ["src/sv", "src/sv_headers"]);
    let dirs = set.source_directories().unwrap();
    assert_eq!(dirs, vec![fs::canonicalize(dir.path().join("src/sv")).unwrap()]);
    assert_eq!(set.roots().len(), 2);
}
