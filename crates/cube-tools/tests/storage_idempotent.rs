use std::fs;
use std::path::{Path, PathBuf};

use cube_tools::{StorageConfig, StorageLocation, TableStore};
use tempfile::tempdir;
use walkdir::WalkDir;

fn snapshot(root: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap().path().to_path_buf())
        .collect();
    entries.sort();
    entries
}

#[test]
fn ensure_creates_both_levels() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("nested").join("data");
    let location = StorageLocation::new(&StorageConfig::with_base(&base));

    location.ensure_storage_location().unwrap();

    assert!(location.app_dir().is_dir());
    assert!(location.table_dir().is_dir());
    assert_eq!(location.table_dir(), base.join("CubeRobot").join("Tables"));
}

#[test]
fn ensure_twice_equals_ensure_once() {
    let dir = tempdir().unwrap();
    let location = StorageLocation::new(&StorageConfig::with_base(dir.path()));

    location.ensure_storage_location().unwrap();
    let once = snapshot(dir.path());
    location.ensure_storage_location().unwrap();
    let twice = snapshot(dir.path());

    assert_eq!(once, twice);
}

#[test]
fn existing_tables_survive_ensure() {
    let dir = tempdir().unwrap();
    let store = TableStore::new(StorageLocation::new(&StorageConfig::with_base(dir.path())));
    store.write_table_flat("keep", &[1, 2, 3]).unwrap();

    store.location().ensure_storage_location().unwrap();

    assert_eq!(store.read_table_flat("keep").unwrap(), vec![1, 2, 3]);
}

#[test]
fn blocked_directory_creation_is_a_storage_fault() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("occupied");
    fs::write(&base, b"not a directory").unwrap();
    let store = TableStore::new(StorageLocation::new(&StorageConfig::with_base(&base)));

    let err = store.location().ensure_storage_location().unwrap_err();
    assert!(err.is_storage_fault());
    assert_eq!(err.info().code, "storage-mkdir");

    let err = store.write_table_flat("t", &[0]).unwrap_err();
    assert_eq!(err.info().code, "storage-mkdir");
}
