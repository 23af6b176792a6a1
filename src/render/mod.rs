mod frame;
mod null_renderer;
mod primitives;
mod text_metrics;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontSpec, LineCap, LineDash, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive,
};
pub use text_metrics::{EstimatedTextMeasurer, TextMeasurer, TextSize};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from axis layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer,
};
