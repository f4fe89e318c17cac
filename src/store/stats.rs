//! Aggregate statistics over the student store

use crate::types::{
    Bucket, Distribution, DistributionField, Statistics, StoreError, StoreResult, StudentRecord,
};

use super::StudentStore;

/// Default number of histogram buckets
pub const DEFAULT_BINS: usize = 10;

/// Upper limit on histogram buckets
pub const MAX_BINS: usize = 100;

/// Count and mean grade/age; all zeros when the store is empty
pub fn statistics(store: &StudentStore) -> Statistics {
    let records = store.records.read();
    let total = records.len();
    if total == 0 {
        return Statistics::default();
    }

    let grade_sum: f64 = records.iter().map(|r| r.grade).sum();
    let age_sum: f64 = records.iter().map(|r| f64::from(r.age)).sum();

    Statistics {
        total_students: total,
        average_grade: grade_sum / total as f64,
        average_age: age_sum / total as f64,
    }
}

/// Equal-width histogram of one field over all records
pub fn distribution(
    store: &StudentStore,
    field: DistributionField,
    bins: usize,
) -> StoreResult<Distribution> {
    if bins == 0 {
        return Err(StoreError::invalid("bins must be at least 1"));
    }
    if bins > MAX_BINS {
        return Err(StoreError::invalid(format!(
            "bins must be at most {}",
            MAX_BINS
        )));
    }

    let values: Vec<f64> = store
        .records
        .read()
        .iter()
        .map(|r| field_value(r, field))
        .collect();

    Ok(Distribution {
        field,
        buckets: histogram(&values, bins),
    })
}

fn field_value(record: &StudentRecord, field: DistributionField) -> f64 {
    match field {
        DistributionField::Grade => record.grade,
        DistributionField::Age => f64::from(record.age),
    }
}

/// Bucket `values` into `bins` equal-width buckets spanning their min and max
///
/// A single distinct value gets the range `[v - 0.5, v + 0.5]`. The last
/// bucket includes its upper edge. Non-finite values are skipped and `bins`
/// is capped at `MAX_BINS`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bucket> {
    let bins = bins.min(MAX_BINS);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        buckets[idx].count += 1;
    }

    buckets
}
