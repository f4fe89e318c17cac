//! Aggregate result types

use serde::{Deserialize, Serialize};

/// Class-wide aggregates over all current records
///
/// An empty store yields all zeros rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_students: usize,
    pub average_grade: f64,
    pub average_age: f64,
}

/// Numeric record field a distribution can be computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionField {
    #[default]
    Grade,
    Age,
}

/// One histogram bucket covering `[lower, upper)`, or `[lower, upper]` for the last bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub field: DistributionField,
    pub buckets: Vec<Bucket>,
}

impl Distribution {
    /// Total number of records counted across all buckets
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistics_field_names() {
        let stats = Statistics {
            total_students: 2,
            average_grade: 88.75,
            average_age: 19.5,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({"total_students": 2, "average_grade": 88.75, "average_age": 19.5})
        );
    }

    #[test]
    fn test_distribution_field_lowercase() {
        let field: DistributionField = serde_json::from_value(json!("age")).unwrap();
        assert_eq!(field, DistributionField::Age);
        assert_eq!(DistributionField::default(), DistributionField::Grade);
    }
}
