use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use crate::api::dashboard::Status;
use crate::api::filter::scatter_eligible;
use crate::core::{PlotArea, PlotMargins, ScaleMap, Viewport};
use crate::data::record::fmt_plain_number;
use crate::data::{normalize, RawRow, Record};
use crate::error::FilmscopeResult;
use crate::render::{
    CirclePrimitive, Color, DirectorPalette, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Pointer-to-point distance within which a hover hit registers.
pub const HOVER_RADIUS_PX: f64 = 8.0;

const POINT_RADIUS_PX: f64 = 6.0;
const HOVERED_RADIUS_PX: f64 = 8.0;
const BASELINE_OPACITY: f64 = 0.92;
const STATUS_FONT_PX: f64 = 12.0;

/// Tooltip payload for one hovered point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverDetail {
    pub title: Option<String>,
    pub year: f64,
    pub director: Option<String>,
    pub rating: f64,
    pub runtime: f64,
}

impl HoverDetail {
    fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year,
            director: record.director.clone(),
            rating: record.rating,
            runtime: record.runtime,
        }
    }

    /// Display lines with em-dash placeholders for missing values.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        fn num(value: f64) -> String {
            if value.is_finite() {
                fmt_plain_number(value)
            } else {
                "—".to_owned()
            }
        }

        vec![
            self.title.clone().unwrap_or_else(|| "(untitled)".to_owned()),
            format!("year: {}", num(self.year)),
            format!("director: {}", self.director.as_deref().unwrap_or("—")),
            format!("rating: {}", num(self.rating)),
            format!("runtime: {} min", num(self.runtime)),
        ]
    }
}

/// Static scatter view: runtime on X, rating on Y, hover detail per point.
///
/// Eligibility is stricter than the record set: only rows with finite
/// runtime and rating are plotted; everything else is dropped at load.
pub struct ScatterView<R: Renderer> {
    renderer: R,
    area: PlotArea,
    records: Vec<Record>,
    scales: Option<ScaleMap>,
    palette: DirectorPalette,
    status: Status,
    hovered: Option<usize>,
}

impl<R: Renderer> ScatterView<R> {
    pub fn new(renderer: R, viewport: Viewport, margins: PlotMargins) -> FilmscopeResult<Self> {
        Ok(Self {
            renderer,
            area: PlotArea::new(viewport, margins)?,
            records: Vec::new(),
            scales: None,
            palette: DirectorPalette::from_directors(std::iter::empty()),
            status: Status::Loading,
            hovered: None,
        })
    }

    /// Single-shot load; failure is terminal and leaves the view inert.
    pub fn load(&mut self, rows: FilmscopeResult<Vec<RawRow>>) -> FilmscopeResult<()> {
        let rows = match rows {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, "scatter load failed");
                self.status = Status::LoadFailed(super::dashboard::load_failure_message(error));
                return self.render();
            }
        };

        let normalized: Vec<Record> = rows.iter().map(normalize).collect();
        let eligible = scatter_eligible(&normalized);
        info!(
            rows = normalized.len(),
            eligible = eligible.len(),
            "scatter rows normalized"
        );

        if eligible.is_empty() {
            super::dashboard::log_row_samples(&rows, &normalized);
            self.status = Status::ZeroEligible;
            return self.render();
        }

        self.scales = Some(ScaleMap::fit(
            &eligible,
            |record| record.runtime,
            |record| record.rating,
            self.area,
        )?);
        self.palette =
            DirectorPalette::from_directors(eligible.iter().filter_map(|r| r.director.as_deref()));
        self.status = Status::Ready {
            rows: eligible.len(),
        };
        self.records = eligible;
        self.render()
    }

    /// Resolves the nearest point within [`HOVER_RADIUS_PX`] of the pointer.
    ///
    /// Returns the hover detail when a point is hit; pointer positions in the
    /// gaps between points clear the hover.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> FilmscopeResult<Option<HoverDetail>> {
        let Some(scales) = self.scales else {
            return Ok(None);
        };

        let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
        for (index, record) in self.records.iter().enumerate() {
            let (px, py) = scales.project(record, |r| r.runtime, |r| r.rating)?;
            let distance = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
            if distance <= HOVER_RADIUS_PX {
                candidates.push((OrderedFloat(distance), index));
            }
        }

        let hit = candidates.into_iter().min().map(|(_, index)| index);
        if hit != self.hovered {
            self.hovered = hit;
            self.render()?;
        }

        Ok(hit.map(|index| HoverDetail::from_record(&self.records[index])))
    }

    /// Clears any hover emphasis.
    pub fn pointer_leave(&mut self) -> FilmscopeResult<()> {
        if self.hovered.take().is_some() {
            return self.render();
        }
        Ok(())
    }

    pub fn render(&mut self) -> FilmscopeResult<()> {
        let mut frame = RenderFrame::new(self.area.viewport());
        frame = frame.with_text(TextPrimitive::new(
            self.status.to_string(),
            0.0,
            STATUS_FONT_PX,
            STATUS_FONT_PX,
            Color::rgb(0.9, 0.9, 0.9),
            TextHAlign::Left,
        ));

        if let Some(scales) = self.scales {
            for (index, record) in self.records.iter().enumerate() {
                let (cx, cy) = scales.project(record, |r| r.runtime, |r| r.rating)?;
                let hovered = self.hovered == Some(index);
                frame = frame.with_circle(CirclePrimitive::new(
                    cx,
                    cy,
                    if hovered {
                        HOVERED_RADIUS_PX
                    } else {
                        POINT_RADIUS_PX
                    },
                    self.palette.color_for(record.director.as_deref()),
                    1.0,
                    if hovered { 1.0 } else { BASELINE_OPACITY },
                ));
            }
        }

        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn scales(&self) -> Option<ScaleMap> {
        self.scales
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
