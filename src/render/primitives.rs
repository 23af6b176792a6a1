use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const RED: Self = Self::rgb(0.929, 0.357, 0.357);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Font request carried by text primitives.
///
/// `line_height_px` is what label placement uses for vertical offsets; it is
/// larger than `size_px` to account for ascent, descent and leading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub line_height_px: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl FontSpec {
    pub const LINE_HEIGHT_RATIO: f64 = 1.2;

    #[must_use]
    pub fn new(size_px: f64) -> Self {
        Self {
            size_px,
            line_height_px: size_px * Self::LINE_HEIGHT_RATIO,
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height_px: f64) -> Self {
        self.line_height_px = line_height_px;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_height_px.is_finite() || self.line_height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font line height must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Dash pattern: alternating on/off lengths starting `phase` pixels in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDash {
    pub phase: f64,
    pub lengths: SmallVec<[f64; 4]>,
}

impl LineDash {
    #[must_use]
    pub fn new(phase: f64, lengths: &[f64]) -> Self {
        Self {
            phase,
            lengths: SmallVec::from_slice(lengths),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        if self.lengths.is_empty() {
            return Err(ChartError::InvalidData(
                "dash pattern must not be empty".to_owned(),
            ));
        }
        if self
            .lengths
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if self.lengths.iter().all(|length| *length == 0.0) {
            return Err(ChartError::InvalidData(
                "dash pattern must contain a non-zero length".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Stroke state applied to one line primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStrokeStyle {
    pub width: f64,
    pub color: Color,
    /// `None` draws a solid line.
    pub dash: Option<LineDash>,
    pub cap: LineCap,
    pub antialias: bool,
}

impl LineStrokeStyle {
    #[must_use]
    pub fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dash: None,
            cap: LineCap::Butt,
            antialias: true,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<LineDash>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: LineStrokeStyle,
    /// Drawing outside this rect is discarded.
    pub clip: Option<Rect>,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: LineStrokeStyle) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
            clip: None,
        }
    }

    #[must_use]
    pub fn horizontal(x1: f64, x2: f64, y: f64, stroke: LineStrokeStyle) -> Self {
        Self::new(x1, y, x2, y, stroke)
    }

    #[must_use]
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if let Some(clip) = self.clip {
            if !clip.is_finite() || clip.width < 0.0 || clip.height < 0.0 {
                return Err(ChartError::InvalidData(
                    "line clip rect must be finite with non-negative size".to_owned(),
                ));
            }
        }
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the top edge of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}
