use crate::api::controls::Controls;
use crate::data::Record;

/// Visible subset of records for the dashboard under the current controls.
///
/// Pure conjunction of predicates, recomputed fully on every control
/// change; output order is the input order (stable filter, never re-sorted).
/// An empty result is a valid terminal state the caller must surface as an
/// explicit diagnostic, not an error.
#[must_use]
pub fn visible_records(all: &[Record], controls: &Controls) -> Vec<Record> {
    all.iter()
        .filter(|record| {
            record.rating.is_finite()
                && record.year.is_finite()
                && controls.years.contains(record.year)
                && controls.director.matches(record)
                && controls.metric.field(record).is_finite()
        })
        .cloned()
        .collect()
}

/// Eligible subset for the static scatter: runtime and rating both finite.
#[must_use]
pub fn scatter_eligible(all: &[Record]) -> Vec<Record> {
    all.iter()
        .filter(|record| record.runtime.is_finite() && record.rating.is_finite())
        .cloned()
        .collect()
}
