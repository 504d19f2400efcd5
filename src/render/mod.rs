mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::DirectorPalette;
pub use primitives::{CirclePrimitive, Color, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::FilmscopeResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from data, filter, and selection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> FilmscopeResult<()>;
}
