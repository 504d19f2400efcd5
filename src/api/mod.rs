mod controls;
mod dashboard;
mod events;
mod filter;
mod scatter;
mod selection;
mod view_sync;

pub use controls::{Controls, DirectorFilter, Metric, YearRange, distinct_directors};
pub use dashboard::{DashboardContext, DashboardEngine, Status};
pub use events::{DashboardEvent, RenderAction};
pub use filter::{scatter_eligible, visible_records};
pub use scatter::{HoverDetail, ScatterView, HOVER_RADIUS_PX};
pub use selection::{BrushRect, SelectionPhase, SelectionState};
pub use view_sync::{PointEmphasis, TableRow, format_gross, point_emphasis, table_rows, TABLE_ROW_CAP};
