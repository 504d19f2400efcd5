use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::controls::Controls;
use crate::api::events::{DashboardEvent, RenderAction};
use crate::api::filter::visible_records;
use crate::api::selection::{SelectionPhase, SelectionState};
use crate::api::view_sync::{point_emphasis, table_rows, TableRow};
use crate::core::{PlotArea, PlotMargins, ScaleMap, Viewport};
use crate::data::{normalize, RawRow, Record};
use crate::error::FilmscopeResult;
use crate::render::{
    CirclePrimitive, Color, DirectorPalette, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const POINT_RADIUS_PX: f64 = 6.0;
const STATUS_FONT_PX: f64 = 12.0;
const DIAGNOSTIC_SAMPLE_ROWS: usize = 5;

/// User-visible load/filter status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Status {
    /// Initial load still pending.
    Loading,
    /// Data loaded; the count is the currently visible row count.
    Ready { rows: usize },
    /// Load succeeded but no row had the minimum finite fields.
    ZeroEligible,
    /// Current controls filter everything out.
    NoMatches,
    /// Terminal transport/parse failure; no interaction is wired up.
    LoadFailed(String),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Loading => write!(f, "loading…"),
            Status::Ready { rows } => write!(f, "loaded: {rows} rows"),
            Status::ZeroEligible => write!(
                f,
                "zero eligible rows; check column names and values (samples on the log)"
            ),
            Status::NoMatches => write!(
                f,
                "no rows match the current filters; check metric, director, and year range"
            ),
            Status::LoadFailed(message) => write!(f, "load failed: {message}"),
        }
    }
}

/// The dashboard's entire mutable view state, owned in one place.
///
/// Constructed once per load and mutated exclusively through
/// [`DashboardContext::apply`]; there are no module-level mutables and no
/// other mutation path, so every update cycle's dependencies are explicit.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    records: Vec<Record>,
    controls: Controls,
    selection: SelectionState,
    visible: Vec<Record>,
    scales: Option<ScaleMap>,
    status: Status,
    area: PlotArea,
    palette: DirectorPalette,
}

impl DashboardContext {
    pub fn new(viewport: Viewport, margins: PlotMargins) -> FilmscopeResult<Self> {
        Ok(Self {
            records: Vec::new(),
            controls: Controls::for_records(&[]),
            selection: SelectionState::default(),
            visible: Vec::new(),
            scales: None,
            status: Status::Loading,
            area: PlotArea::new(viewport, margins)?,
            palette: DirectorPalette::from_directors(std::iter::empty()),
        })
    }

    /// Ingests the single-shot initial load.
    ///
    /// An `Err` is terminal: the status becomes [`Status::LoadFailed`] and no
    /// further state is initialized. Rows without finite rating and year are
    /// kept in the record set (other views may use them) but if none qualify
    /// the dashboard lands in the zero-eligible diagnostic state, with raw
    /// and normalized samples written to the tracing channel.
    pub fn ingest(&mut self, rows: FilmscopeResult<Vec<RawRow>>) {
        let rows = match rows {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, "initial load failed");
                self.status = Status::LoadFailed(load_failure_message(error));
                return;
            }
        };

        let records: Vec<Record> = rows.iter().map(normalize).collect();
        info!(rows = records.len(), "rows normalized");

        let eligible = records
            .iter()
            .filter(|record| record.rating.is_finite() && record.year.is_finite())
            .count();
        if eligible == 0 {
            log_row_samples(&rows, &records);
            self.records = records;
            self.status = Status::ZeroEligible;
            return;
        }

        self.controls = Controls::for_records(&records);
        self.palette =
            DirectorPalette::from_directors(records.iter().filter_map(|r| r.director.as_deref()));
        self.records = records;
        self.selection.clear();
        self.refresh();
    }

    /// Single update function: applies one event and reports what to redraw.
    ///
    /// Events run synchronously to completion; the next event is only
    /// dispatched after this returns, so there is no re-entrant mutation.
    pub fn apply(&mut self, event: DashboardEvent) -> RenderAction {
        // Failed and zero-eligible views are inert: nothing was wired up.
        if matches!(
            self.status,
            Status::Loading | Status::LoadFailed(_) | Status::ZeroEligible
        ) {
            return RenderAction::Skip;
        }

        match event {
            DashboardEvent::MetricChanged(metric) => {
                self.controls.metric = metric;
                self.refresh();
                RenderAction::Full
            }
            DashboardEvent::DirectorChanged(director) => {
                self.controls.director = director;
                self.refresh();
                RenderAction::Full
            }
            DashboardEvent::YearMinChanged(value) => {
                self.controls.years.min = value;
                self.refresh();
                RenderAction::Full
            }
            DashboardEvent::YearMaxChanged(value) => {
                self.controls.years.max = value;
                self.refresh();
                RenderAction::Full
            }
            DashboardEvent::BrushStarted => {
                self.selection.begin_brush();
                RenderAction::Skip
            }
            DashboardEvent::BrushCommitted(rect) => {
                let Some(scales) = self.scales else {
                    return RenderAction::Skip;
                };
                match self.selection.commit_brush(
                    rect,
                    &self.visible,
                    &scales,
                    self.controls.metric,
                ) {
                    Ok(selected) => {
                        debug!(selected = selected.len(), "brush committed");
                        RenderAction::Emphasis
                    }
                    Err(error) => {
                        warn!(%error, "brush commit failed");
                        RenderAction::Skip
                    }
                }
            }
            DashboardEvent::BackgroundCleared => {
                self.selection.clear();
                RenderAction::Emphasis
            }
        }
    }

    /// Recomputes the visible subset and refits both scales.
    ///
    /// Scales always come from the *current* filtered subset; reusing a
    /// previous filter state's scales here would be a correctness bug.
    fn refresh(&mut self) {
        self.visible = visible_records(&self.records, &self.controls);

        if self.visible.is_empty() {
            self.scales = None;
            self.status = Status::NoMatches;
            return;
        }

        let metric = self.controls.metric;
        self.scales = ScaleMap::fit(
            &self.visible,
            |record| metric.field(record),
            |record| record.rating,
            self.area,
        )
        .ok();
        self.status = Status::Ready {
            rows: self.visible.len(),
        };
    }

    /// Formatted results table for the current selection.
    #[must_use]
    pub fn table(&self) -> Vec<TableRow> {
        table_rows(&self.selection, &self.visible)
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn scales(&self) -> Option<ScaleMap> {
        self.scales
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    /// Materializes the scene for the current state.
    pub fn build_frame(&self) -> FilmscopeResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.area.viewport());

        frame = frame.with_text(TextPrimitive::new(
            self.status.to_string(),
            0.0,
            STATUS_FONT_PX,
            STATUS_FONT_PX,
            Color::rgb(0.9, 0.9, 0.9),
            TextHAlign::Left,
        ));

        let Some(scales) = self.scales else {
            return Ok(frame);
        };

        let metric = self.controls.metric;
        for record in &self.visible {
            let (cx, cy) = scales.project(record, |r| metric.field(r), |r| r.rating)?;
            let emphasis = point_emphasis(&self.selection, record);
            frame = frame.with_circle(CirclePrimitive::new(
                cx,
                cy,
                POINT_RADIUS_PX,
                self.palette.color_for(record.director.as_deref()),
                emphasis.stroke_width,
                emphasis.opacity,
            ));
        }

        if self.selection.phase() == SelectionPhase::Selected {
            if let Some(rect) = self.selection.committed_rect() {
                let (x0, y0, x1, y1) = rect.ordered();
                frame = frame.with_rect(RectPrimitive::new(
                    x0,
                    y0,
                    x1 - x0,
                    y1 - y0,
                    Color::rgba(1.0, 1.0, 1.0, 0.08),
                ));
            }
        }

        Ok(frame)
    }
}

/// Underlying message only; the status line adds its own prefix.
pub(crate) fn load_failure_message(error: crate::error::FilmscopeError) -> String {
    match error {
        crate::error::FilmscopeError::Load(message) => message,
        other => other.to_string(),
    }
}

pub(crate) fn log_row_samples(rows: &[RawRow], records: &[Record]) {
    let raw_sample = serde_json::to_string(&rows[..rows.len().min(DIAGNOSTIC_SAMPLE_ROWS)])
        .unwrap_or_else(|error| format!("<serialize failed: {error}>"));
    let normalized_sample =
        serde_json::to_string(&records[..records.len().min(DIAGNOSTIC_SAMPLE_ROWS)])
            .unwrap_or_else(|error| format!("<serialize failed: {error}>"));
    warn!(%raw_sample, %normalized_sample, "no eligible rows after normalization");
}

/// Main orchestration facade consumed by host applications.
///
/// `DashboardEngine` wires control and brush events through the context's
/// update function and pushes the resulting frame to the renderer.
pub struct DashboardEngine<R: Renderer> {
    renderer: R,
    context: DashboardContext,
}

impl<R: Renderer> DashboardEngine<R> {
    pub fn new(renderer: R, viewport: Viewport, margins: PlotMargins) -> FilmscopeResult<Self> {
        Ok(Self {
            renderer,
            context: DashboardContext::new(viewport, margins)?,
        })
    }

    /// Feeds the one-time initial load and draws the first frame.
    pub fn ingest_rows(&mut self, rows: FilmscopeResult<Vec<RawRow>>) -> FilmscopeResult<()> {
        self.context.ingest(rows);
        self.render()
    }

    /// Dispatches one event and redraws when anything visible changed.
    pub fn handle_event(&mut self, event: DashboardEvent) -> FilmscopeResult<()> {
        match self.context.apply(event) {
            RenderAction::Skip => Ok(()),
            RenderAction::Emphasis | RenderAction::Full => self.render(),
        }
    }

    pub fn render(&mut self) -> FilmscopeResult<()> {
        let frame = self.context.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn context(&self) -> &DashboardContext {
        &self.context
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
