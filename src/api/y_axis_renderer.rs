use tracing::{debug, trace};

use crate::core::{Point, Rect, Transformer, ViewPortHandler, Viewport};
use crate::error::ChartResult;
use crate::render::{
    EstimatedTextMeasurer, FontSpec, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer,
    TextHAlign, TextMeasurer, TextPrimitive,
};

use super::label_layout::{centered_in_band_x, fixed_label_anchor, suppress_duplicate_labels};
use super::{AxisDependency, AxisLegendType, LimitLabelPosition, LimitLine, YAxis, YAxisLabelAnchor};

/// Label y offset is `line_height / LABEL_CENTER_DIVISOR` so the text box
/// straddles the entry's pixel row.
const LABEL_CENTER_DIVISOR: f64 = 2.5;
/// Gap between the content bottom and the low label in `LowHigh` mode.
const LOW_LABEL_GAP_PX: f64 = 8.0;
/// Upward nudge of the low label when it is not the axis minimum.
const LOW_LABEL_RAISE_PX: f64 = -6.0;
const AUXILIARY_TITLE_GAP_PX: f64 = 5.0;
const LIMIT_LABEL_INSET_PX: f64 = 4.0;

/// Renders the value axis of one chart side.
///
/// The renderer owns the axis configuration, the view-port geometry and the
/// (optional) value-to-pixel transform. Each `render_*` call appends draw
/// primitives to a [`RenderFrame`]; elements whose configuration is absent
/// or disabled draw nothing.
#[derive(Debug, Clone)]
pub struct YAxisRenderer<M: TextMeasurer = EstimatedTextMeasurer> {
    axis: YAxis,
    view_port: ViewPortHandler,
    transformer: Option<Transformer>,
    measurer: M,
    axis_maximum_value: Option<f64>,
}

impl YAxisRenderer<EstimatedTextMeasurer> {
    #[must_use]
    pub fn new(view_port: ViewPortHandler, axis: YAxis, transformer: Option<Transformer>) -> Self {
        Self {
            axis,
            view_port,
            transformer,
            measurer: EstimatedTextMeasurer,
            axis_maximum_value: None,
        }
    }
}

impl<M: TextMeasurer> YAxisRenderer<M> {
    /// Swaps the font metrics source, e.g. for a Pango-backed measurer.
    #[must_use]
    pub fn with_measurer<N: TextMeasurer>(self, measurer: N) -> YAxisRenderer<N> {
        YAxisRenderer {
            axis: self.axis,
            view_port: self.view_port,
            transformer: self.transformer,
            measurer,
            axis_maximum_value: self.axis_maximum_value,
        }
    }

    #[must_use]
    pub fn axis(&self) -> &YAxis {
        &self.axis
    }

    pub fn axis_mut(&mut self) -> &mut YAxis {
        &mut self.axis
    }

    #[must_use]
    pub fn view_port(&self) -> &ViewPortHandler {
        &self.view_port
    }

    pub fn set_view_port(&mut self, view_port: ViewPortHandler) {
        self.view_port = view_port;
    }

    #[must_use]
    pub fn transformer(&self) -> Option<&Transformer> {
        self.transformer.as_ref()
    }

    pub fn set_transformer(&mut self, transformer: Option<Transformer>) {
        self.transformer = transformer;
    }

    /// Un-padded data maximum. Without it the `LowHigh` legend skips the
    /// high label, which avoids a bogus HIGH for flat series.
    #[must_use]
    pub fn axis_maximum_value(&self) -> Option<f64> {
        self.axis_maximum_value
    }

    pub fn set_axis_maximum_value(&mut self, value: Option<f64>) {
        self.axis_maximum_value = value;
    }

    /// Grid, limit lines, axis line and labels, in back-to-front order.
    pub fn render(&self, frame: &mut RenderFrame) {
        self.render_grid_lines(frame);
        self.render_limit_lines(frame);
        self.render_axis_line(frame);
        self.render_axis_labels(frame);
    }

    /// Validates the configuration and materializes a full axis frame sized
    /// to the view port.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        self.axis.validate()?;
        let viewport = Viewport::new(
            self.view_port.chart_width().ceil() as u32,
            self.view_port.chart_height().ceil() as u32,
        );
        let mut frame = RenderFrame::new(viewport);
        self.render(&mut frame);
        frame.validate()?;
        debug!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built y-axis frame"
        );
        Ok(frame)
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame()?;
        renderer.render(&frame)
    }

    pub fn render_axis_labels(&self, frame: &mut RenderFrame) {
        let axis = &self.axis;
        if !axis.enabled || !axis.draw_labels {
            debug!("y-axis labels disabled");
            return;
        }

        let line_height = axis.label_font.line_height_px;
        let y_offset = line_height / LABEL_CENTER_DIVISOR + axis.y_offset;
        let (fixed_position, text_align) = fixed_label_anchor(
            &self.view_port,
            axis.axis_dependency,
            axis.label_position,
            axis.x_offset,
        );

        let positions = self.transformed_positions();
        self.draw_y_labels(
            frame,
            fixed_position,
            &positions,
            y_offset - line_height,
            text_align,
        );
    }

    /// Draws the value labels at `fixed_position` using the entry pixel rows in
    /// `positions` (index-aligned with the axis entries).
    pub fn draw_y_labels(
        &self,
        frame: &mut RenderFrame,
        fixed_position: f64,
        positions: &[Point],
        offset: f64,
        text_align: TextHAlign,
    ) {
        match self.axis.legend_type {
            AxisLegendType::All => {
                self.draw_all_labels(frame, fixed_position, positions, offset, text_align);
            }
            AxisLegendType::LowHigh => {
                self.draw_low_high_labels(frame, fixed_position, positions, offset, text_align);
            }
        }
    }

    fn draw_all_labels(
        &self,
        frame: &mut RenderFrame,
        fixed_position: f64,
        positions: &[Point],
        offset: f64,
        text_align: TextHAlign,
    ) {
        let axis = &self.axis;
        let labels = suppress_duplicate_labels(&axis.formatted_labels());
        let count = labels.len();

        for (index, label) in labels.iter().enumerate() {
            let Some(text) = label else {
                continue;
            };
            if !axis.draw_top_y_label_entry && index + 1 >= count {
                break;
            }
            let Some(position) = positions.get(index) else {
                break;
            };

            let x = self.label_x(text, fixed_position);
            trace!(index, text = text.as_str(), y = position.y, "y-axis label");
            push_text(
                frame,
                text,
                Point::new(x, position.y + offset),
                axis.label_font,
                axis,
                text_align,
            );
        }
    }

    fn draw_low_high_labels(
        &self,
        frame: &mut RenderFrame,
        fixed_position: f64,
        positions: &[Point],
        offset: f64,
        text_align: TextHAlign,
    ) {
        let axis = &self.axis;
        let count = axis.entry_count();
        let titles = &axis.legend_auxiliary_titles;

        if count > 0 {
            self.draw_low_label(frame, fixed_position, offset, text_align);
        }

        if count < 2 || axis.axis_high_value.is_some() {
            return;
        }
        let (Some(last_title), Some(max_value)) = (titles.last(), self.axis_maximum_value) else {
            return;
        };
        if max_value == axis.axis_minimum {
            return;
        }
        let Some(top) = positions.get(count - 1) else {
            return;
        };

        // Undo the space-top padding applied to the axis maximum.
        let original_max =
            (axis.axis_maximum + axis.space_top * axis.axis_minimum) / (1.0 + axis.space_top);
        let high_text = axis.format_value(original_max);
        let x = self.label_x(&high_text, fixed_position);
        push_text(
            frame,
            &high_text,
            Point::new(x, top.y + offset),
            axis.label_font,
            axis,
            text_align,
        );
        if !last_title.is_empty() {
            self.draw_auxiliary_label(frame, last_title, fixed_position, top.y, offset, text_align);
        }
    }

    fn draw_low_label(
        &self,
        frame: &mut RenderFrame,
        fixed_position: f64,
        offset: f64,
        text_align: TextHAlign,
    ) {
        let axis = &self.axis;
        let titles = &axis.legend_auxiliary_titles;
        let Some(first_title) = titles.first() else {
            return;
        };

        let low_text = axis.format_value(axis.axis_low_value);
        let x = self.label_x(&low_text, fixed_position);
        let low_value_offset = if axis.axis_minimum != axis.axis_low_value {
            LOW_LABEL_RAISE_PX
        } else {
            0.0
        };

        let content_max_y = self.view_port.content_rect().max_y();
        let mut y = content_max_y + offset + LOW_LABEL_GAP_PX + low_value_offset;
        let mut title = first_title;
        if axis.axis_high_value.is_some() {
            title = titles.get(1).unwrap_or(first_title);
            y = content_max_y / 3.0;
        }

        // The raise applies twice to the value text; the title stays at `y`.
        push_text(
            frame,
            &low_text,
            Point::new(x, y + low_value_offset),
            axis.label_font,
            axis,
            text_align,
        );
        self.draw_auxiliary_label(frame, title, fixed_position, y, offset, text_align);
    }

    fn label_x(&self, text: &str, fixed_position: f64) -> f64 {
        match self.axis.label_anchor {
            YAxisLabelAnchor::FixedPosition => fixed_position,
            YAxisLabelAnchor::CenteredInAxisBand => {
                let width = self.measurer.measure(text, self.axis.label_font).width;
                centered_in_band_x(
                    width,
                    self.axis.axis_line_width,
                    self.view_port.chart_width(),
                )
            }
        }
    }

    fn draw_auxiliary_label(
        &self,
        frame: &mut RenderFrame,
        title: &str,
        fixed_position: f64,
        y_position: f64,
        offset: f64,
        text_align: TextHAlign,
    ) {
        let font = self.axis.legend_auxiliary_titles_font;
        let size = self.measurer.measure(title, font);
        let x = fixed_position - (size.width / 2.0 + AUXILIARY_TITLE_GAP_PX);
        let y = y_position + offset - size.height;
        push_text(frame, title, Point::new(x, y), font, &self.axis, text_align);
    }

    pub fn render_axis_line(&self, frame: &mut RenderFrame) {
        let axis = &self.axis;
        if !axis.enabled || !axis.draw_axis_line {
            debug!("y-axis line disabled");
            return;
        }

        let view_port = &self.view_port;
        let stroke = axis.axis_line_stroke();
        let line = match axis.axis_dependency {
            AxisDependency::Left => LinePrimitive::new(
                view_port.content_left(),
                view_port.content_top(),
                view_port.content_left(),
                view_port.content_bottom(),
                stroke,
            ),
            AxisDependency::Right => LinePrimitive::new(
                view_port.content_right(),
                view_port.content_top() - axis.extra_top_offset,
                view_port.content_right(),
                view_port.content_bottom() + axis.extra_bottom_offset,
                stroke,
            ),
        };
        frame.push_line(line);
    }

    pub fn render_grid_lines(&self, frame: &mut RenderFrame) {
        let axis = &self.axis;
        if !axis.enabled {
            debug!("y-axis disabled, skipping grid");
            return;
        }

        if axis.draw_grid_lines {
            let stroke = axis.grid_stroke();
            let clip = self.grid_clipping_rect();
            for position in self.transformed_positions() {
                self.draw_grid_line(frame, position, &stroke, clip);
            }
        }

        if axis.draw_zero_line {
            self.draw_zero_line(frame);
        }
    }

    /// Content rect grown by the grid line width so edge lines are not halved.
    #[must_use]
    pub fn grid_clipping_rect(&self) -> Rect {
        self.view_port
            .content_rect()
            .expanded_vertically(self.axis.grid_line_width)
    }

    /// Draws one grid line across the content at `position.y`.
    pub fn draw_grid_line(
        &self,
        frame: &mut RenderFrame,
        position: Point,
        stroke: &LineStrokeStyle,
        clip: Rect,
    ) {
        frame.push_line(self.horizontal_content_line(position.y, stroke.clone(), clip));
    }

    /// Pixel positions of the axis entries; empty without a transformer.
    #[must_use]
    pub fn transformed_positions(&self) -> Vec<Point> {
        let Some(transformer) = &self.transformer else {
            return Vec::new();
        };

        let mut positions: Vec<Point> = self
            .axis
            .entries
            .iter()
            .map(|entry| Point::new(0.0, *entry))
            .collect();
        transformer.point_values_to_pixel(&mut positions);
        positions
    }

    /// Draws the line at value zero, when a transformer and a zero line color
    /// are configured.
    pub fn draw_zero_line(&self, frame: &mut RenderFrame) {
        let (Some(transformer), Some(stroke)) = (&self.transformer, self.axis.zero_line_stroke())
        else {
            debug!("zero line skipped: no transformer or color");
            return;
        };

        let clip = self
            .view_port
            .content_rect()
            .expanded_vertically(self.axis.zero_line_width);
        let position = transformer.pixel_for_values(0.0, 0.0);
        frame.push_line(self.horizontal_content_line(position.y, stroke, clip));
    }

    pub fn render_limit_lines(&self, frame: &mut RenderFrame) {
        let Some(transformer) = &self.transformer else {
            return;
        };
        if self.axis.limit_lines.is_empty() {
            return;
        }

        let matrix = transformer.value_to_pixel_matrix();
        for line in self.axis.limit_lines.iter().filter(|line| line.enabled) {
            let clip = self
                .view_port
                .content_rect()
                .expanded_vertically(line.line_width);
            let y = matrix.apply(Point::new(0.0, line.limit)).y;
            trace!(limit = line.limit, y, "limit line");

            frame.push_line(self.horizontal_content_line(y, line.stroke(), clip));

            if line.draw_label && !line.label.is_empty() {
                self.push_limit_label(frame, line, y);
            }
        }
    }

    fn push_limit_label(&self, frame: &mut RenderFrame, line: &LimitLine, y: f64) {
        let line_height = line.value_font.line_height_px;
        let x_offset = LIMIT_LABEL_INSET_PX + line.x_offset;
        let y_offset = line.line_width + line_height + line.y_offset;

        let (x, y, align) = match line.label_position {
            LimitLabelPosition::RightTop => (
                self.view_port.content_right() - x_offset,
                y - y_offset,
                TextHAlign::Right,
            ),
            LimitLabelPosition::RightBottom => (
                self.view_port.content_right() - x_offset,
                y + y_offset - line_height,
                TextHAlign::Right,
            ),
            LimitLabelPosition::LeftTop => (
                self.view_port.content_left() + x_offset,
                y - y_offset,
                TextHAlign::Left,
            ),
            LimitLabelPosition::LeftBottom => (
                self.view_port.content_left() + x_offset,
                y + y_offset - line_height,
                TextHAlign::Left,
            ),
        };

        frame.push_text(TextPrimitive::new(
            line.label.clone(),
            x,
            y,
            line.value_font,
            line.value_text_color,
            align,
        ));
    }

    fn horizontal_content_line(
        &self,
        y: f64,
        stroke: LineStrokeStyle,
        clip: Rect,
    ) -> LinePrimitive {
        LinePrimitive::horizontal(
            self.view_port.content_left(),
            self.view_port.content_right(),
            y,
            stroke,
        )
        .with_clip(clip)
    }
}

fn push_text(
    frame: &mut RenderFrame,
    text: &str,
    at: Point,
    font: FontSpec,
    axis: &YAxis,
    align: TextHAlign,
) {
    if text.is_empty() {
        return;
    }
    frame.push_text(TextPrimitive::new(
        text,
        at.x,
        at.y,
        font,
        axis.label_text_color,
        align,
    ));
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::YAxisRenderer;
    use crate::api::{AxisLegendType, YAxis};
    use crate::core::{Transformer, ViewPortHandler, Viewport};
    use crate::render::RenderFrame;

    fn renderer(axis: YAxis) -> YAxisRenderer {
        let view_port = ViewPortHandler::new(400.0, 300.0)
            .and_then(|h| h.with_offsets(40.0, 10.0, 20.0, 30.0))
            .expect("view port");
        let transformer = Transformer::for_value_range(&view_port, 0.0, 1.0, 0.0, 100.0, false)
            .expect("transformer");
        YAxisRenderer::new(view_port, axis, Some(transformer))
    }

    fn frame() -> RenderFrame {
        RenderFrame::new(Viewport::new(400, 300))
    }

    #[test]
    fn transformed_positions_follow_entries() {
        let axis = YAxis::default().with_entries(vec![0.0, 50.0, 100.0], 0.0, 100.0);
        let positions = renderer(axis).transformed_positions();
        let ys: Vec<f64> = positions.iter().map(|p| p.y).collect();
        assert_eq!(ys.len(), 3);
        assert_relative_eq!(ys[0], 270.0);
        assert_relative_eq!(ys[1], 140.0);
        assert_relative_eq!(ys[2], 10.0);
    }

    #[test]
    fn hidden_top_entry_is_not_labelled() {
        let mut axis = YAxis::default().with_entries(vec![0.0, 50.0, 100.0], 0.0, 100.0);
        axis.draw_top_y_label_entry = false;
        let mut frame = frame();
        renderer(axis).render_axis_labels(&mut frame);

        let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["0", "50"]);
    }

    #[test]
    fn low_high_without_titles_draws_nothing() {
        let axis = YAxis::default()
            .with_entries(vec![0.0, 50.0, 100.0], 0.0, 100.0)
            .with_legend_type(AxisLegendType::LowHigh);
        let mut frame = frame();
        renderer(axis).render_axis_labels(&mut frame);
        assert!(frame.texts.is_empty());
    }

    #[test]
    fn zero_line_without_color_is_skipped() {
        let mut axis = YAxis::default();
        axis.draw_grid_lines = false;
        axis.draw_zero_line = true;
        axis.zero_line_color = None;
        let mut frame = frame();
        renderer(axis).render_grid_lines(&mut frame);
        assert!(frame.lines.is_empty());
    }
}
