//! Write operations for the student store

use tracing::{info, warn};

use crate::types::{StoreError, StoreResult, StudentRecord};
use crate::validation::validate_record;

use super::StudentStore;

/// Insert a record (holds the write lock across the uniqueness check and the push)
///
/// Returns a copy of the stored record. On error the collection is untouched.
pub fn add(store: &StudentStore, record: StudentRecord) -> StoreResult<StudentRecord> {
    let mut records = store.records.write();

    if records.iter().any(|r| r.id == record.id) {
        warn!(id = record.id, "Rejected student with duplicate id");
        return Err(StoreError::DuplicateId(record.id));
    }

    if let Err(e) = validate_record(&record, store.policy) {
        warn!(id = record.id, error = %e, "Rejected invalid student");
        return Err(e);
    }

    records.push(record.clone());
    info!(id = record.id, total = records.len(), "Student added");
    Ok(record)
}
