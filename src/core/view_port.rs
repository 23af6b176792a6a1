use serde::{Deserialize, Serialize};

use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};

/// Chart geometry: total size plus the offsets that frame the content area.
///
/// The content rect is where series, grid and limit lines are drawn. Axis
/// labels placed "outside" the chart live in the offset margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPortHandler {
    chart_width: f64,
    chart_height: f64,
    offset_left: f64,
    offset_top: f64,
    offset_right: f64,
    offset_bottom: f64,
}

impl Default for ViewPortHandler {
    fn default() -> Self {
        Self {
            chart_width: 0.0,
            chart_height: 0.0,
            offset_left: 0.0,
            offset_top: 0.0,
            offset_right: 0.0,
            offset_bottom: 0.0,
        }
    }
}

impl ViewPortHandler {
    pub fn new(chart_width: f64, chart_height: f64) -> ChartResult<Self> {
        let mut handler = Self::default();
        handler.set_chart_dimens(chart_width, chart_height)?;
        Ok(handler)
    }

    /// Resizes the chart while keeping the current offsets.
    pub fn set_chart_dimens(&mut self, width: f64, height: f64) -> ChartResult<()> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidData(
                "chart dimensions must be finite and >= 0".to_owned(),
            ));
        }
        self.chart_width = width;
        self.chart_height = height;
        Ok(())
    }

    pub fn restrain_view_port(
        &mut self,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) -> ChartResult<()> {
        for (name, value) in [
            ("left", offset_left),
            ("top", offset_top),
            ("right", offset_right),
            ("bottom", offset_bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "view port offset `{name}` must be finite and >= 0"
                )));
            }
        }
        if offset_left + offset_right > self.chart_width
            || offset_top + offset_bottom > self.chart_height
        {
            return Err(ChartError::InvalidData(
                "view port offsets exceed chart dimensions".to_owned(),
            ));
        }

        self.offset_left = offset_left;
        self.offset_top = offset_top;
        self.offset_right = offset_right;
        self.offset_bottom = offset_bottom;
        Ok(())
    }

    pub fn with_offsets(
        mut self,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) -> ChartResult<Self> {
        self.restrain_view_port(offset_left, offset_top, offset_right, offset_bottom)?;
        Ok(self)
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.offset_left
    }

    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.offset_top
    }

    #[must_use]
    pub fn offset_right(&self) -> f64 {
        self.offset_right
    }

    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        self.offset_bottom
    }

    #[must_use]
    pub fn content_left(&self) -> f64 {
        self.offset_left
    }

    #[must_use]
    pub fn content_right(&self) -> f64 {
        self.chart_width - self.offset_right
    }

    #[must_use]
    pub fn content_top(&self) -> f64 {
        self.offset_top
    }

    #[must_use]
    pub fn content_bottom(&self) -> f64 {
        self.chart_height - self.offset_bottom
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_right() - self.content_left()
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_bottom() - self.content_top()
    }

    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.content_left(),
            self.content_top(),
            self.content_width(),
            self.content_height(),
        )
    }
}
