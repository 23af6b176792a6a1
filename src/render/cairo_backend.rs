use cairo::{Antialias, Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FontSpec, LineCap, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextMeasurer,
    TextPrimitive, TextSize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub clipped_lines: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// `None` keeps whatever is already on the target, which is what an axis
    /// layered over a series plot needs.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            stroke_line(context, line)?;
            stats.lines_drawn += 1;
            if line.clip.is_some() {
                stats.clipped_lines += 1;
            }
        }

        for text in &frame.texts {
            show_text(context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Text measurer backed by Pango layouts on a 1x1 scratch surface.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> TextSize {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        TextSize {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;

    if let Some(clip) = line.clip {
        context.rectangle(clip.x, clip.y, clip.width, clip.height);
        context.clip();
    }

    let stroke = &line.stroke;
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context.set_line_cap(match stroke.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    });
    context.set_antialias(if stroke.antialias {
        Antialias::Default
    } else {
        Antialias::None
    });
    match &stroke.dash {
        Some(dash) => context.set_dash(&dash.lengths, dash.phase),
        None => context.set_dash(&[], 0.0),
    }

    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    stroked
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(text.font)));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn font_description(font: FontSpec) -> FontDescription {
    let mut description = FontDescription::from_string("Sans");
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
