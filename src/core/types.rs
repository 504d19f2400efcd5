use serde::{Deserialize, Serialize};

use crate::error::{FilmscopeError, FilmscopeResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins reserved for axes and labels around the inner plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 30.0,
            bottom: 60.0,
            left: 70.0,
        }
    }
}

/// Inner drawing rectangle of a chart viewport.
///
/// All scale ranges and brush coordinates are expressed relative to this
/// rectangle's origin, so axis collaborators can offset primitives by the
/// margins without the engine knowing about them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    viewport: Viewport,
    margins: PlotMargins,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: PlotMargins) -> FilmscopeResult<Self> {
        if !viewport.is_valid() {
            return Err(FilmscopeError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let area = Self { viewport, margins };
        if area.inner_width() <= 0.0 || area.inner_height() <= 0.0 {
            return Err(FilmscopeError::InvalidData(
                "plot margins leave no inner drawing area".to_owned(),
            ));
        }
        Ok(area)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(self) -> PlotMargins {
        self.margins
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    /// X pixel range, increasing left to right.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.inner_width())
    }

    /// Y pixel range, decreasing top to bottom so larger values sit higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.inner_height(), 0.0)
    }
}
