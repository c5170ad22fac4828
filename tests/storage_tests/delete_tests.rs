//! Tests for delete-by-rewrite
//!
//! These tests verify:
//! - Exactly one record is removed and survivors keep their order
//! - Only the first of several duplicate ids is removed per call
//! - A miss leaves the data file byte-for-byte unchanged
//! - The temp file never outlives a delete
//! - Failing to create the temp file leaves the data file untouched
//! - A torn trailing record is dropped by the rewrite
//! - A temp path that aliases the data file is refused without touching it

use std::fs::{self, OpenOptions};
use std::io::Write;

use studentdb::record::RECORD_SIZE;
use studentdb::{Config, RecordStore, Student, StudentDbError, SyncMode};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open_dir(temp_dir.path()).unwrap();
    (temp_dir, store)
}

fn student(id: i32) -> Student {
    Student::new(id, format!("Name {}", id), "Chemistry", 2.0 + id as f32 / 10.0, 2)
}

fn store_with_ids(ids: &[i32]) -> (TempDir, RecordStore) {
    let (temp, store) = setup_temp_store();
    for &id in ids {
        store.append(&student(id)).unwrap();
    }
    (temp, store)
}

fn listed_ids(store: &RecordStore) -> Vec<i32> {
    store
        .list_all()
        .unwrap()
        .iter()
        .map(|s| s.student_id)
        .collect()
}

// =============================================================================
// Basic Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_exactly_one() {
    let (_temp, store) = store_with_ids(&[1, 2, 3, 4, 5]);

    let removed = store.delete_by_id(3).unwrap();

    assert_eq!(removed, 1);
    assert_eq!(store.find_by_id(3).unwrap(), None);
    assert_eq!(listed_ids(&store), vec![1, 2, 4, 5]);
    for id in [1, 2, 4, 5] {
        assert_eq!(store.find_by_id(id).unwrap(), Some(student(id)));
    }
    assert!(!store.temp_file().exists());
}

#[test]
fn test_delete_then_list() {
    let (_temp, store) = store_with_ids(&[1, 2, 3]);

    store.delete_by_id(2).unwrap();

    assert_eq!(listed_ids(&store), vec![1, 3]);
}

#[test]
fn test_delete_first_and_last() {
    let (_temp, store) = store_with_ids(&[10, 20, 30]);

    assert_eq!(store.delete_by_id(10).unwrap(), 1);
    assert_eq!(store.delete_by_id(30).unwrap(), 1);

    assert_eq!(listed_ids(&store), vec![20]);
}

#[test]
fn test_delete_only_record_leaves_empty_file() {
    let (_temp, store) = store_with_ids(&[1]);

    assert_eq!(store.delete_by_id(1).unwrap(), 1);

    assert!(store.data_file().exists());
    assert_eq!(fs::metadata(store.data_file()).unwrap().len(), 0);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_delete_with_sync_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .sync_mode(SyncMode::EveryWrite)
        .build();
    let store = RecordStore::open(config).unwrap();
    store.append(&student(1)).unwrap();
    store.append(&student(2)).unwrap();

    assert_eq!(store.delete_by_id(1).unwrap(), 1);
    assert_eq!(listed_ids(&store), vec![2]);
}

// =============================================================================
// Duplicate Tests
// =============================================================================

#[test]
fn test_delete_first_match_only() {
    let (_temp, store) = setup_temp_store();
    let r1 = Student::new(7, "R1", "Art", 3.0, 1);
    let other = Student::new(8, "Other", "Art", 3.0, 1);
    let r2 = Student::new(7, "R2", "Art", 2.0, 2);
    store.append(&r1).unwrap();
    store.append(&other).unwrap();
    store.append(&r2).unwrap();

    assert_eq!(store.delete_by_id(7).unwrap(), 1);
    assert_eq!(store.find_by_id(7).unwrap(), Some(r2.clone()));
    assert_eq!(store.list_all().unwrap(), vec![other.clone(), r2]);

    assert_eq!(store.delete_by_id(7).unwrap(), 1);
    assert_eq!(store.find_by_id(7).unwrap(), None);
    assert_eq!(store.list_all().unwrap(), vec![other]);

    assert_eq!(store.delete_by_id(7).unwrap(), 0);
}

// =============================================================================
// No-Op Tests
// =============================================================================

#[test]
fn test_delete_nonexistent_is_noop() {
    let (_temp, store) = store_with_ids(&[1, 2, 3]);
    let before = fs::read(store.data_file()).unwrap();

    let removed = store.delete_by_id(99).unwrap();

    assert_eq!(removed, 0);
    assert_eq!(fs::read(store.data_file()).unwrap(), before);
    assert!(!store.temp_file().exists());
}

#[test]
fn test_delete_miss_keeps_trailing_bytes() {
    let (_temp, store) = store_with_ids(&[1, 2]);
    let mut file = OpenOptions::new()
        .append(true)
        .open(store.data_file())
        .unwrap();
    file.write_all(&[7u8; 10]).unwrap();
    drop(file);
    let before = fs::read(store.data_file()).unwrap();

    assert_eq!(store.delete_by_id(42).unwrap(), 0);

    assert_eq!(fs::read(store.data_file()).unwrap(), before);
}

#[test]
fn test_delete_on_missing_file() {
    let (_temp, store) = setup_temp_store();

    assert_eq!(store.delete_by_id(1).unwrap(), 0);

    assert!(!store.data_file().exists());
    assert!(!store.temp_file().exists());
}

// =============================================================================
// Rewrite Tests
// =============================================================================

#[test]
fn test_delete_preserves_survivor_bytes() {
    let (_temp, store) = store_with_ids(&[1, 2, 3]);
    let before = fs::read(store.data_file()).unwrap();

    store.delete_by_id(2).unwrap();
    let after = fs::read(store.data_file()).unwrap();

    let mut expected = before[..RECORD_SIZE].to_vec();
    expected.extend_from_slice(&before[2 * RECORD_SIZE..]);
    assert_eq!(after, expected);
}

#[test]
fn test_delete_drops_partial_tail() {
    let (_temp, store) = store_with_ids(&[1, 2]);
    let mut file = OpenOptions::new()
        .append(true)
        .open(store.data_file())
        .unwrap();
    file.write_all(&[0xEE; 33]).unwrap();
    drop(file);

    assert_eq!(store.delete_by_id(1).unwrap(), 1);

    assert_eq!(
        fs::metadata(store.data_file()).unwrap().len(),
        RECORD_SIZE as u64
    );
    assert_eq!(listed_ids(&store), vec![2]);
}

#[test]
fn test_delete_overwrites_stale_temp_file() {
    let (_temp, store) = store_with_ids(&[1, 2]);
    fs::write(store.temp_file(), b"left over from a crash").unwrap();

    assert_eq!(store.delete_by_id(2).unwrap(), 1);

    assert_eq!(listed_ids(&store), vec![1]);
    assert!(!store.temp_file().exists());
}

#[test]
fn test_temp_file_failure_leaves_original_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("students.dat"))
        .temp_file(temp_dir.path().join("missing_dir/temp.dat"))
        .build();
    let store = RecordStore::open(config).unwrap();
    store.append(&student(1)).unwrap();
    store.append(&student(2)).unwrap();
    let before = fs::read(store.data_file()).unwrap();

    let result = store.delete_by_id(1);

    assert!(result.is_err());
    assert_eq!(fs::read(store.data_file()).unwrap(), before);
    assert_eq!(listed_ids(&store), vec![1, 2]);
}

// =============================================================================
// Aliased Temp File Tests
// =============================================================================

#[test]
fn test_temp_path_spelled_as_data_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("students.dat"))
        .temp_file(temp_dir.path().join("sub/../students.dat"))
        .build();

    let result = RecordStore::open(config);

    assert!(matches!(result, Err(StudentDbError::Config(_))));
}

#[cfg(unix)]
#[test]
fn test_temp_symlink_to_data_file_keeps_data() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("students.dat");
    let link = temp_dir.path().join("temp.dat");
    let config = Config::builder()
        .data_file(&data_file)
        .temp_file(&link)
        .build();
    let store = RecordStore::open(config).unwrap();
    store.append(&student(1)).unwrap();
    store.append(&student(2)).unwrap();
    std::os::unix::fs::symlink(&data_file, &link).unwrap();
    let before = fs::read(&data_file).unwrap();

    let miss = store.delete_by_id(99);
    let hit = store.delete_by_id(1);

    assert!(matches!(miss, Err(StudentDbError::Config(_))));
    assert!(matches!(hit, Err(StudentDbError::Config(_))));
    assert_eq!(fs::read(&data_file).unwrap(), before);
    assert_eq!(listed_ids(&store), vec![1, 2]);
}
