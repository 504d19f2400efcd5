use serde::{Deserialize, Serialize};

use crate::api::controls::{DirectorFilter, Metric};
use crate::api::selection::BrushRect;

/// Every user interaction the dashboard reacts to, as one explicit command
/// enum dispatched through a single update function. Host toolkits translate
/// their native widget callbacks into these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    MetricChanged(Metric),
    DirectorChanged(DirectorFilter),
    YearMinChanged(f64),
    YearMaxChanged(f64),
    /// Drag started; transient, no committed effect.
    BrushStarted,
    /// Drag ended. `None` means an empty rectangle, which clears.
    BrushCommitted(Option<BrushRect>),
    /// Click on the chart background outside any point.
    BackgroundCleared,
}

/// What the host should redraw after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    /// Nothing visible changed.
    Skip,
    /// Only point emphasis and the table changed; scales are untouched.
    Emphasis,
    /// Filtered set and scales changed; redraw everything.
    Full,
}
