//! Validation rules and policy

use std::ops::RangeInclusive;

use crate::types::{StoreError, StoreResult, StudentRecord};

/// Accepted ages under the strict policy
pub const AGE_RANGE: RangeInclusive<i32> = 15..=100;

/// Accepted grades under the strict policy
pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// How much the store checks beyond field presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Only require a non-empty name
    #[default]
    Lenient,
    /// Also require age and grade to be within their ranges
    Strict,
}

/// Check a record before insertion
pub fn validate_record(record: &StudentRecord, policy: ValidationPolicy) -> StoreResult<()> {
    if record.name.is_empty() {
        return Err(StoreError::invalid("Name is required"));
    }

    if policy == ValidationPolicy::Strict {
        if record.name.trim().is_empty() {
            return Err(StoreError::invalid("Name must not be blank"));
        }
        if !AGE_RANGE.contains(&record.age) {
            return Err(StoreError::invalid(format!(
                "Age {} is outside {}..={}",
                record.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        // contains() is false for NaN
        if !GRADE_RANGE.contains(&record.grade) {
            return Err(StoreError::invalid(format!(
                "Grade {} is outside {}..={}",
                record.grade,
                GRADE_RANGE.start(),
                GRADE_RANGE.end()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, age: i32, grade: f64) -> StudentRecord {
        StudentRecord::new(
            1,
            name,
            age,
            grade,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_name_rejected_by_both_policies() {
        for policy in [ValidationPolicy::Lenient, ValidationPolicy::Strict] {
            assert!(matches!(
                validate_record(&record("", 20, 80.0), policy),
                Err(StoreError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_blank_name_only_rejected_when_strict() {
        assert!(validate_record(&record("   ", 20, 80.0), ValidationPolicy::Lenient).is_ok());
        assert!(matches!(
            validate_record(&record("   ", 20, 80.0), ValidationPolicy::Strict),
            Err(StoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_lenient_accepts_out_of_range_values() {
        assert!(validate_record(&record("Old Timer", 120, -5.0), ValidationPolicy::Lenient).is_ok());
    }

    #[test]
    fn test_strict_rejects_age_out_of_range() {
        let err = validate_record(&record("Kid", 14, 80.0), ValidationPolicy::Strict).unwrap_err();
        assert!(err.to_string().contains("Age 14"));
        assert!(validate_record(&record("Edge", 15, 80.0), ValidationPolicy::Strict).is_ok());
        assert!(validate_record(&record("Edge", 100, 80.0), ValidationPolicy::Strict).is_ok());
    }

    #[test]
    fn test_strict_rejects_grade_out_of_range() {
        assert!(validate_record(&record("A", 20, 100.1), ValidationPolicy::Strict).is_err());
        assert!(validate_record(&record("A", 20, f64::NAN), ValidationPolicy::Strict).is_err());
        assert!(validate_record(&record("A", 20, 0.0), ValidationPolicy::Strict).is_ok());
    }
}
