//! Data types for the student roster
//!
//! This module contains the record type, the aggregate result types and the
//! error type shared by the store and its adapters.

mod error;
mod statistics;
mod student;

pub use error::{StoreError, StoreResult};
pub use statistics::{Bucket, Distribution, DistributionField, Statistics};
pub use student::{StudentRecord, DATE_FORMAT};
