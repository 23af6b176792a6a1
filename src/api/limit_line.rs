use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec, LineDash, LineStrokeStyle};

pub const LIMIT_LINE_MIN_WIDTH_PX: f64 = 0.2;
pub const LIMIT_LINE_MAX_WIDTH_PX: f64 = 12.0;

/// Corner of the limit line the label is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitLabelPosition {
    #[default]
    RightTop,
    RightBottom,
    LeftTop,
    LeftBottom,
}

/// A horizontal reference line at a fixed axis value, with an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitLine {
    pub limit: f64,
    pub label: String,
    pub enabled: bool,
    pub line_width: f64,
    pub line_color: Color,
    pub line_dash: Option<LineDash>,
    pub label_position: LimitLabelPosition,
    pub x_offset: f64,
    pub y_offset: f64,
    pub value_font: FontSpec,
    pub value_text_color: Color,
    pub draw_label: bool,
}

impl Default for LimitLine {
    fn default() -> Self {
        Self {
            limit: 0.0,
            label: String::new(),
            enabled: true,
            line_width: 2.0,
            line_color: Color::RED,
            line_dash: None,
            label_position: LimitLabelPosition::RightTop,
            x_offset: 0.0,
            y_offset: 0.0,
            value_font: FontSpec::new(13.0),
            value_text_color: Color::BLACK,
            draw_label: true,
        }
    }
}

impl LimitLine {
    #[must_use]
    pub fn new(limit: f64, label: impl Into<String>) -> Self {
        Self {
            limit,
            label: label.into(),
            ..Self::default()
        }
    }

    /// Width is clamped to `[LIMIT_LINE_MIN_WIDTH_PX, LIMIT_LINE_MAX_WIDTH_PX]`.
    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.set_line_width(width);
        self
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = if width.is_nan() {
            LIMIT_LINE_MIN_WIDTH_PX
        } else {
            width.clamp(LIMIT_LINE_MIN_WIDTH_PX, LIMIT_LINE_MAX_WIDTH_PX)
        };
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_line_dash(mut self, dash: LineDash) -> Self {
        self.line_dash = Some(dash);
        self
    }

    #[must_use]
    pub fn stroke(&self) -> LineStrokeStyle {
        LineStrokeStyle::solid(self.line_width, self.line_color).with_dash(self.line_dash.clone())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.limit.is_finite() {
            return Err(ChartError::InvalidData(
                "limit line value must be finite".to_owned(),
            ));
        }
        if !(LIMIT_LINE_MIN_WIDTH_PX..=LIMIT_LINE_MAX_WIDTH_PX).contains(&self.line_width) {
            return Err(ChartError::InvalidData(format!(
                "limit line width must be within [{}, {}]",
                LIMIT_LINE_MIN_WIDTH_PX, LIMIT_LINE_MAX_WIDTH_PX
            )));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "limit line label offsets must be finite".to_owned(),
            ));
        }
        self.stroke().validate()?;
        self.value_font.validate()?;
        self.value_text_color.validate()
    }
}
