//! Student Store - Core record engine
//!
//! Owns the in-memory record collection and enforces the unique-ID
//! invariant. Writes take an exclusive lock for the whole check-then-insert;
//! reads share the lock and hand out clones.

mod crud;
mod query;
mod stats;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::types::{Distribution, DistributionField, Statistics, StoreResult, StudentRecord};
use crate::validation::ValidationPolicy;

pub use stats::{histogram, DEFAULT_BINS, MAX_BINS};

/// In-memory store of student records, kept in insertion order
#[derive(Debug, Default)]
pub struct StudentStore {
    pub(crate) records: RwLock<Vec<StudentRecord>>,
    pub(crate) policy: ValidationPolicy,
}

impl StudentStore {
    /// Create an empty store with lenient validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given validation policy
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            policy,
        }
    }

    /// Create a store pre-populated with the two demo records
    pub fn with_seed_data() -> Self {
        Self::seeded(ValidationPolicy::default())
    }

    /// Create a store with the demo records and the given policy
    pub fn seeded(policy: ValidationPolicy) -> Self {
        Self {
            records: RwLock::new(seed_records()),
            policy,
        }
    }

    /// Validation policy applied by `add`
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

/// Demo records: John Doe and Jane Smith
pub fn seed_records() -> Vec<StudentRecord> {
    [
        (1, "John Doe", 20, 85.5, (2024, 1, 15)),
        (2, "Jane Smith", 19, 92.0, (2024, 1, 16)),
    ]
    .into_iter()
    .filter_map(|(id, name, age, grade, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| StudentRecord::new(id, name, age, grade, date))
    })
    .collect()
}

// Public operations, implemented in the submodules
impl StudentStore {
    // Writes (from crud.rs)
    pub fn add(&self, record: StudentRecord) -> StoreResult<StudentRecord> {
        crud::add(self, record)
    }

    // Reads (from query.rs)
    pub fn list_all(&self) -> Vec<StudentRecord> {
        query::list_all(self)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<StudentRecord> {
        query::get_by_id(self, id)
    }

    pub fn search_by_name(&self, substring: &str) -> Vec<StudentRecord> {
        query::search_by_name(self, substring)
    }

    pub fn top_by_grade(&self, n: usize) -> Vec<StudentRecord> {
        query::top_by_grade(self, n)
    }

    // Aggregates (from stats.rs)
    pub fn statistics(&self) -> Statistics {
        stats::statistics(self)
    }

    pub fn distribution(&self, field: DistributionField, bins: usize) -> StoreResult<Distribution> {
        stats::distribution(self, field, bins)
    }
}
