//! Field validation for student records
//!
//! Name presence is always checked. Blank names and age/grade ranges are
//! only checked under the strict policy.

mod rules;

pub use rules::{validate_record, ValidationPolicy, AGE_RANGE, GRADE_RANGE};
