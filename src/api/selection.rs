use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::api::controls::Metric;
use crate::core::ScaleMap;
use crate::data::Record;
use crate::error::FilmscopeResult;

/// User-dragged rectangle in inner-plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRect {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Corner-ordered bounds, tolerant of a drag in any direction.
    #[must_use]
    pub fn ordered(self) -> (f64, f64, f64, f64) {
        (
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    /// Inclusive containment on all four bounds.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let (x0, y0, x1, y1) = self.ordered();
        x0 <= x && x <= x1 && y0 <= y && y <= y1
    }
}

/// Brush lifecycle: no selection, mid-drag, or a committed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Brushing,
    Selected,
}

/// Committed selection: membership keys plus the rectangle they came from.
///
/// Membership is tested in pixel space against *projected* coordinates, not
/// raw data values, so the selection always matches what is visually inside
/// the rectangle even under nice-domain padding. Identity is by key, which
/// means the set survives metric changes without being re-derived; only a
/// fresh brush recomputes it against new geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    phase: SelectionPhase,
    keys: IndexSet<String>,
    committed_rect: Option<BrushRect>,
}

impl SelectionState {
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, record: &Record) -> bool {
        self.keys.contains(record.selection_key().as_str())
    }

    #[must_use]
    pub fn committed_rect(&self) -> Option<BrushRect> {
        self.committed_rect
    }

    /// Enters the transient mid-drag state; no committed effect yet.
    pub fn begin_brush(&mut self) {
        self.phase = SelectionPhase::Brushing;
    }

    /// Commits a brush-end rectangle against the currently visible records.
    ///
    /// Membership uses each record's projected pixel coordinates through the
    /// current scales (X = active metric, Y = rating), all bounds inclusive.
    /// A `None` rectangle clears instead. Returns the selected subset in
    /// visible order.
    pub fn commit_brush(
        &mut self,
        rect: Option<BrushRect>,
        visible: &[Record],
        scales: &ScaleMap,
        metric: Metric,
    ) -> FilmscopeResult<Vec<Record>> {
        let Some(rect) = rect else {
            self.clear();
            return Ok(Vec::new());
        };

        // Stored corner-ordered so reversed drags compare equal.
        let (x0, y0, x1, y1) = rect.ordered();
        let rect = BrushRect::new(x0, y0, x1, y1);

        self.keys.clear();
        let mut selected = Vec::new();
        for record in visible {
            let (px, py) =
                scales.project(record, |r| metric.field(r), |r| r.rating)?;
            if rect.contains(px, py) {
                self.keys.insert(record.selection_key());
                selected.push(record.clone());
            }
        }

        self.phase = SelectionPhase::Selected;
        self.committed_rect = Some(rect);
        Ok(selected)
    }

    /// Clears the selection completely and returns to idle.
    pub fn clear(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.keys.clear();
        self.committed_rect = None;
    }
}
