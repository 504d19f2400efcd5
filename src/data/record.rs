use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One input cell before normalization.
///
/// Input rows are loosely typed: delimited-text sources yield strings, while
/// embedding hosts may hand over already-parsed numbers. Absent cells are
/// `Null` rather than a missing map entry so diagnostics can show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Num(f64),
    Str(String),
    Null,
}

impl RawValue {
    /// Trimmed textual form, or `None` when the cell is null or blank.
    #[must_use]
    pub fn non_blank_text(&self) -> Option<String> {
        match self {
            RawValue::Num(value) => Some(fmt_plain_number(*value)),
            RawValue::Str(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
            RawValue::Null => None,
        }
    }
}

/// One input row: column name to cell, in source column order.
pub type RawRow = IndexMap<String, RawValue>;

/// Canonical normalized unit of data for one input row.
///
/// Numeric fields hold `NaN` when the source cell was absent or unparseable;
/// they are never coerced to zero or any other sentinel. Views drop records
/// whose required fields are non-finite instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: Option<String>,
    pub year: f64,
    pub director: Option<String>,
    pub rating: f64,
    pub runtime: f64,
    pub gross: f64,
    /// Original untouched row, retained for diagnostics only.
    pub raw: RawRow,
}

impl Record {
    /// Identity key used by the selection set: `title + "_" + year`.
    ///
    /// Distinct records sharing title and year collide on this key.
    #[must_use]
    pub fn selection_key(&self) -> String {
        format!(
            "{}_{}",
            self.title.as_deref().unwrap_or(""),
            fmt_plain_number(self.year)
        )
    }

    /// Re-expresses the record as a canonical raw row.
    ///
    /// Feeding the result back through normalization yields the same values,
    /// which is the shape diagnostics and idempotence checks rely on.
    #[must_use]
    pub fn as_canonical_row(&self) -> RawRow {
        let mut row = RawRow::new();
        row.insert("title".to_owned(), opt_text(&self.title));
        row.insert("year".to_owned(), RawValue::Num(self.year));
        row.insert("director".to_owned(), opt_text(&self.director));
        row.insert("rating".to_owned(), RawValue::Num(self.rating));
        row.insert("runtime".to_owned(), RawValue::Num(self.runtime));
        row.insert("gross".to_owned(), RawValue::Num(self.gross));
        row
    }
}

fn opt_text(value: &Option<String>) -> RawValue {
    match value {
        Some(text) => RawValue::Str(text.clone()),
        None => RawValue::Null,
    }
}

/// Formats a number the way loosely-typed sources print them: integral
/// values without a fractional part, non-finite values as `NaN`.
#[must_use]
pub fn fmt_plain_number(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_owned();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
