//! Read operations for the student store

use tracing::debug;

use crate::types::{StoreError, StoreResult, StudentRecord};

use super::StudentStore;

/// All records in insertion order
pub fn list_all(store: &StudentStore) -> Vec<StudentRecord> {
    store.records.read().clone()
}

/// Exact id lookup
pub fn get_by_id(store: &StudentStore, id: i64) -> StoreResult<StudentRecord> {
    let records = store.records.read();
    match records.iter().find(|r| r.id == id) {
        Some(record) => Ok(record.clone()),
        None => {
            debug!(id, "Student lookup missed");
            Err(StoreError::NotFound(id))
        }
    }
}

/// Case-insensitive substring match on name; an empty substring matches everything
pub fn search_by_name(store: &StudentStore, substring: &str) -> Vec<StudentRecord> {
    let needle = substring.to_lowercase();
    let matches: Vec<StudentRecord> = store
        .records
        .read()
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    debug!(query = substring, matches = matches.len(), "Name search");
    matches
}

/// Highest grades first; equal grades keep insertion order
///
/// Records with a non-finite grade are left out.
pub fn top_by_grade(store: &StudentStore, n: usize) -> Vec<StudentRecord> {
    let mut records = list_all(store);
    records.retain(|r| r.grade.is_finite());
    // sort_by is stable
    records.sort_by(|a, b| b.grade.total_cmp(&a.grade));
    records.truncate(n);
    records
}
