use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::core::view_port::ViewPortHandler;
use crate::error::{ChartError, ChartResult};

/// 2D affine matrix mapping `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Returns the transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    pub fn invert(self) -> ChartResult<Self> {
        let det = self.a * self.d - self.b * self.c;
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return Err(ChartError::SingularTransform);
        }

        Ok(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            tx: (self.c * self.ty - self.d * self.tx) / det,
            ty: (self.b * self.tx - self.a * self.ty) / det,
        })
    }
}

/// Maps chart values to pixels for one axis dependency.
///
/// The mapping is the composition of a value matrix (data range to content
/// size, Y flipped) and an offset matrix (content origin inside the chart).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transformer {
    matrix_value_to_px: AffineTransform,
    matrix_offset: AffineTransform,
}

impl Transformer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transformer for the given value window in one call.
    pub fn for_value_range(
        view_port: &ViewPortHandler,
        x_min: f64,
        delta_x: f64,
        y_min: f64,
        delta_y: f64,
        inverted: bool,
    ) -> ChartResult<Self> {
        let mut transformer = Self::new();
        transformer.prepare_matrix_value_px(view_port, x_min, delta_x, delta_y, y_min)?;
        transformer.prepare_matrix_offset(view_port, inverted);
        Ok(transformer)
    }

    /// Prepares the value matrix from the visible value window.
    ///
    /// A zero span on either axis is treated as a span of `1` so the scale
    /// stays finite for flat data sets.
    pub fn prepare_matrix_value_px(
        &mut self,
        view_port: &ViewPortHandler,
        chart_x_min: f64,
        delta_x: f64,
        delta_y: f64,
        chart_y_min: f64,
    ) -> ChartResult<()> {
        if !chart_x_min.is_finite()
            || !chart_y_min.is_finite()
            || !delta_x.is_finite()
            || !delta_y.is_finite()
        {
            return Err(ChartError::InvalidData(
                "transformer value window must be finite".to_owned(),
            ));
        }

        let delta_x = if delta_x == 0.0 { 1.0 } else { delta_x };
        let delta_y = if delta_y == 0.0 { 1.0 } else { delta_y };

        let scale_x = view_port.content_width() / delta_x;
        let scale_y = view_port.content_height() / delta_y;

        self.matrix_value_to_px = AffineTransform::translation(-chart_x_min, -chart_y_min)
            .then(AffineTransform::scale(scale_x, -scale_y));
        Ok(())
    }

    /// Prepares the matrix that moves value-space pixels into the content rect.
    pub fn prepare_matrix_offset(&mut self, view_port: &ViewPortHandler, inverted: bool) {
        self.matrix_offset = if inverted {
            AffineTransform::translation(view_port.offset_left(), -view_port.offset_top())
                .then(AffineTransform::scale(1.0, -1.0))
        } else {
            AffineTransform::translation(
                view_port.offset_left(),
                view_port.chart_height() - view_port.offset_bottom(),
            )
        };
    }

    #[must_use]
    pub fn value_to_pixel_matrix(&self) -> AffineTransform {
        self.matrix_value_to_px.then(self.matrix_offset)
    }

    /// Maps every point in place from value space to pixel space.
    pub fn point_values_to_pixel(&self, points: &mut [Point]) {
        let matrix = self.value_to_pixel_matrix();
        for point in points.iter_mut() {
            *point = matrix.apply(*point);
        }
    }

    #[must_use]
    pub fn pixel_for_values(&self, x: f64, y: f64) -> Point {
        self.value_to_pixel_matrix().apply(Point::new(x, y))
    }

    /// Maps a pixel position back to chart values.
    pub fn values_by_touch_point(&self, x: f64, y: f64) -> ChartResult<Point> {
        let inverse = self.value_to_pixel_matrix().invert()?;
        Ok(inverse.apply(Point::new(x, y)))
    }
}
