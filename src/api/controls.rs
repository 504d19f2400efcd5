use serde::{Deserialize, Serialize};

use crate::data::Record;

/// X-axis metric choices for the dashboard scatter.
///
/// `Year` stays selectable even though year is also the filter axis; the
/// source design leaves that combination uncorrected and so do we.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Metric {
    #[default]
    Runtime,
    Gross,
    Year,
}

impl Metric {
    /// Accessor for this metric's field on a record.
    #[must_use]
    pub fn field(self, record: &Record) -> f64 {
        match self {
            Metric::Runtime => record.runtime,
            Metric::Gross => record.gross,
            Metric::Year => record.year,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Runtime => "runtime (min)",
            Metric::Gross => "gross",
            Metric::Year => "release year",
        }
    }
}

/// Director restriction, with an explicit sentinel for "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DirectorFilter {
    #[default]
    All,
    Named(String),
}

impl DirectorFilter {
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            DirectorFilter::All => true,
            DirectorFilter::Named(name) => record.director.as_deref() == Some(name.as_str()),
        }
    }
}

/// Live values of the two year-bound controls.
///
/// The bounds can cross while the user drags, so consumers always go
/// through [`YearRange::ordered`] rather than reading the fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: f64,
    pub max: f64,
}

impl YearRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Defensively min/max-ordered bounds.
    #[must_use]
    pub fn ordered(self) -> (f64, f64) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    #[must_use]
    pub fn contains(self, year: f64) -> bool {
        let (lo, hi) = self.ordered();
        year >= lo && year <= hi
    }

    /// Extent of finite years across `records`, for initializing the controls.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for year in records.iter().map(|record| record.year) {
            if year.is_finite() {
                min = min.min(year);
                max = max.max(year);
            }
        }

        if min > max {
            Self::new(f64::NAN, f64::NAN)
        } else {
            Self::new(min, max)
        }
    }
}

/// Current values of every dashboard control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub metric: Metric,
    pub director: DirectorFilter,
    pub years: YearRange,
}

impl Controls {
    /// Initial control values for a freshly loaded record set.
    #[must_use]
    pub fn for_records(records: &[Record]) -> Self {
        Self {
            metric: Metric::default(),
            director: DirectorFilter::default(),
            years: YearRange::from_records(records),
        }
    }
}

/// Distinct director names in ascending order, for populating the selector.
#[must_use]
pub fn distinct_directors(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter_map(|record| record.director.clone())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}
