//! Student Roster
//!
//! An in-memory store of student records with a JSON REST API on top.
//!
//! # Modules
//!
//! - `types`: Record, statistics and error types
//! - `store`: The record store with add, lookup, search and aggregation
//! - `validation`: Field checks applied on add
//! - `config`: Environment-driven server configuration
//! - `api`: Axum router and REST handlers
//!
//! # Example
//!
//! ```
//! use student_roster::{StudentRecord, StudentStore};
//!
//! let store = StudentStore::with_seed_data();
//! let date = StudentRecord::parse_date("2024-02-01").unwrap();
//! store.add(StudentRecord::new(3, "Ada Lovelace", 21, 97.0, date)).unwrap();
//!
//! assert_eq!(store.search_by_name("ada").len(), 1);
//! assert_eq!(store.statistics().total_students, 3);
//! ```

pub mod api;
pub mod config;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::{ConfigError, ServerConfig};
pub use store::StudentStore;
pub use types::{
    Bucket, Distribution, DistributionField, Statistics, StoreError, StoreResult, StudentRecord,
};
pub use validation::ValidationPolicy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
