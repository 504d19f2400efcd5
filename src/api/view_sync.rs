use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::api::selection::{SelectionPhase, SelectionState};
use crate::data::record::fmt_plain_number;
use crate::data::Record;

/// Hard display cap for the results table. Display-only: it never affects
/// chart rendering or the selection set itself.
pub const TABLE_ROW_CAP: usize = 30;

const PLACEHOLDER: &str = "—";

/// Stroke width and opacity for one rendered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEmphasis {
    pub stroke_width: f64,
    pub opacity: f64,
}

impl PointEmphasis {
    /// Neutral appearance when no selection exists.
    pub const BASELINE: Self = Self {
        stroke_width: 1.0,
        opacity: 0.92,
    };
    /// A point inside the committed selection.
    pub const SELECTED: Self = Self {
        stroke_width: 2.5,
        opacity: 1.0,
    };
    /// A point outside the committed selection.
    pub const DIMMED: Self = Self {
        stroke_width: 1.0,
        opacity: 0.35,
    };
}

/// Emphasis for one record under the current selection.
#[must_use]
pub fn point_emphasis(selection: &SelectionState, record: &Record) -> PointEmphasis {
    match selection.phase() {
        SelectionPhase::Selected => {
            if selection.contains(record) {
                PointEmphasis::SELECTED
            } else {
                PointEmphasis::DIMMED
            }
        }
        SelectionPhase::Idle | SelectionPhase::Brushing => PointEmphasis::BASELINE,
    }
}

/// One formatted results-table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub title: String,
    pub year: String,
    pub director: String,
    pub rating: String,
    pub gross: String,
}

impl TableRow {
    fn from_record(record: &Record) -> Self {
        Self {
            title: record
                .title
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_owned()),
            year: fmt_finite(record.year),
            director: record
                .director
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_owned()),
            rating: fmt_finite(record.rating),
            gross: format_gross(record.gross),
        }
    }
}

/// Results table for the current selection: the selected subset of the
/// visible records when a selection exists, otherwise empty. Sorted by
/// rating descending and truncated to [`TABLE_ROW_CAP`] rows.
#[must_use]
pub fn table_rows(selection: &SelectionState, visible: &[Record]) -> Vec<TableRow> {
    if selection.phase() != SelectionPhase::Selected || selection.is_empty() {
        return Vec::new();
    }

    let mut selected: Vec<&Record> = visible
        .iter()
        .filter(|record| selection.contains(record))
        .collect();
    selected.sort_by_key(|record| std::cmp::Reverse(OrderedFloat(record.rating)));

    selected
        .into_iter()
        .take(TABLE_ROW_CAP)
        .map(TableRow::from_record)
        .collect()
}

/// Compact money formatting for the gross column.
///
/// `2_500_000_000` → `"2.50B"`, `750_000` → `"750.00K"`, `1_500` → `"1.50K"`;
/// smaller values print plainly and non-finite values as a placeholder.
#[must_use]
pub fn format_gross(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    if value >= 1e9 {
        return format!("{:.2}B", value / 1e9);
    }
    if value >= 1e6 {
        return format!("{:.2}M", value / 1e6);
    }
    if value >= 1e3 {
        return format!("{:.2}K", value / 1e3);
    }
    fmt_plain_number(value)
}

fn fmt_finite(value: f64) -> String {
    if value.is_finite() {
        fmt_plain_number(value)
    } else {
        PLACEHOLDER.to_owned()
    }
}
