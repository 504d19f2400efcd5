use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::FilmscopeResult;

/// Paired X/Y mappings for one scatter view.
///
/// The domains are fitted to the *currently visible* subset, never the whole
/// dataset, so a `ScaleMap` is only valid for the filter state it was built
/// from and must be refitted on every filter or metric change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMap {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScaleMap {
    /// Fits both axes over `items` using per-axis field accessors.
    ///
    /// X runs left to right, Y top to bottom inverted, per [`PlotArea`].
    pub fn fit<T>(
        items: &[T],
        x_field: impl Fn(&T) -> f64,
        y_field: impl Fn(&T) -> f64,
        area: PlotArea,
    ) -> FilmscopeResult<Self> {
        let x = LinearScale::fit(items.iter().map(&x_field), area.x_range())?;
        let y = LinearScale::fit(items.iter().map(&y_field), area.y_range())?;
        Ok(Self { x, y })
    }

    /// Projects one item into pixel space through both axes.
    pub fn project<T>(
        &self,
        item: &T,
        x_field: impl Fn(&T) -> f64,
        y_field: impl Fn(&T) -> f64,
    ) -> FilmscopeResult<(f64, f64)> {
        let px = self.x.domain_to_pixel(x_field(item))?;
        let py = self.y.domain_to_pixel(y_field(item))?;
        Ok((px, py))
    }
}
