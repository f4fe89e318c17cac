//! Student record type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format of `enrollment_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One student's stored data
///
/// Fields are public so both adapters can build records directly; once a
/// record is inside the store it is only ever handed out as a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub grade: f64,
    pub enrollment_date: NaiveDate,
}

impl StudentRecord {
    /// Create a new record
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i32,
        grade: f64,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade,
            enrollment_date,
        }
    }

    /// Parse a `YYYY-MM-DD` date string
    pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
    }

    /// Enrollment date rendered in wire format
    pub fn enrollment_date_string(&self) -> String {
        self.enrollment_date.format(DATE_FORMAT).to_string()
    }
}
