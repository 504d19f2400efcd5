pub mod scale;
pub mod scale_map;
pub mod types;

pub use scale::LinearScale;
pub use scale_map::ScaleMap;
pub use types::{PlotArea, PlotMargins, Viewport};
