use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec, LineCap, LineDash, LineStrokeStyle};

use super::{AxisValueFormatter, DefaultAxisValueFormatter, LimitLine};

pub const YAXIS_JSON_SCHEMA_V1: u32 = 1;

/// Side of the chart the axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Whether labels sit in the offset margin or inside the content rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisLabelPosition {
    #[default]
    OutsideChart,
    InsideChart,
}

/// Horizontal anchoring policy for value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisLabelAnchor {
    /// Anchor at the fixed x derived from dependency, position and `x_offset`.
    #[default]
    FixedPosition,
    /// Center each label inside an `axis_line_width` wide band hugging the
    /// right chart edge. Labels wider than the band are pinned to x = 0.
    CenteredInAxisBand,
}

/// Which labels the axis shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisLegendType {
    /// One label per entry, with duplicate texts suppressed.
    #[default]
    All,
    /// Only the low value and the original (un-padded) high value, each
    /// paired with an auxiliary title.
    LowHigh,
}

/// Mutable configuration of the value axis.
///
/// Entries and the axis range are computed by the caller; this type only
/// carries them to the renderer together with the presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxis {
    pub enabled: bool,
    pub draw_labels: bool,
    pub draw_axis_line: bool,
    pub draw_grid_lines: bool,
    pub draw_zero_line: bool,
    pub draw_top_y_label_entry: bool,

    pub entries: Vec<f64>,
    pub decimals: u32,
    pub axis_minimum: f64,
    pub axis_maximum: f64,
    pub space_top: f64,
    pub space_bottom: f64,

    pub axis_dependency: AxisDependency,
    pub label_position: YAxisLabelPosition,
    pub label_anchor: YAxisLabelAnchor,
    pub x_offset: f64,
    pub y_offset: f64,
    pub label_font: FontSpec,
    pub label_text_color: Color,

    pub legend_type: AxisLegendType,
    pub legend_auxiliary_titles: Vec<String>,
    pub legend_auxiliary_titles_font: FontSpec,
    pub axis_low_value: f64,
    pub axis_high_value: Option<f64>,

    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_line_dash: Option<LineDash>,
    pub extra_top_offset: f64,
    pub extra_bottom_offset: f64,

    pub grid_color: Color,
    pub grid_line_width: f64,
    pub grid_line_dash: Option<LineDash>,
    pub grid_line_cap: LineCap,
    pub grid_antialias: bool,

    /// `None` disables the zero line even when `draw_zero_line` is set.
    pub zero_line_color: Option<Color>,
    pub zero_line_width: f64,
    pub zero_line_dash: Option<LineDash>,

    pub limit_lines: Vec<LimitLine>,

    #[serde(skip)]
    pub value_formatter: Option<Arc<dyn AxisValueFormatter>>,
}

impl Default for YAxis {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            draw_axis_line: true,
            draw_grid_lines: true,
            draw_zero_line: false,
            draw_top_y_label_entry: true,
            entries: Vec::new(),
            decimals: 0,
            axis_minimum: 0.0,
            axis_maximum: 0.0,
            space_top: 0.1,
            space_bottom: 0.1,
            axis_dependency: AxisDependency::Left,
            label_position: YAxisLabelPosition::OutsideChart,
            label_anchor: YAxisLabelAnchor::FixedPosition,
            x_offset: 5.0,
            y_offset: 0.0,
            label_font: FontSpec::default(),
            label_text_color: Color::BLACK,
            legend_type: AxisLegendType::All,
            legend_auxiliary_titles: Vec::new(),
            legend_auxiliary_titles_font: FontSpec::default(),
            axis_low_value: 0.0,
            axis_high_value: None,
            axis_line_color: Color::GRAY,
            axis_line_width: 0.5,
            axis_line_dash: None,
            extra_top_offset: 0.0,
            extra_bottom_offset: 0.0,
            grid_color: Color::rgba(0.5, 0.5, 0.5, 0.9),
            grid_line_width: 0.5,
            grid_line_dash: None,
            grid_line_cap: LineCap::Butt,
            grid_antialias: true,
            zero_line_color: Some(Color::GRAY),
            zero_line_width: 1.0,
            zero_line_dash: None,
            limit_lines: Vec::new(),
            value_formatter: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct YAxisJsonContractV1 {
    schema_version: u32,
    axis: YAxis,
}

impl YAxis {
    #[must_use]
    pub fn new(axis_dependency: AxisDependency) -> Self {
        Self {
            axis_dependency,
            ..Self::default()
        }
    }

    /// Sets the entries together with the axis range they were computed for.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<f64>, axis_minimum: f64, axis_maximum: f64) -> Self {
        self.entries = entries;
        self.axis_minimum = axis_minimum;
        self.axis_maximum = axis_maximum;
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, label_position: YAxisLabelPosition) -> Self {
        self.label_position = label_position;
        self
    }

    #[must_use]
    pub fn with_legend_type(mut self, legend_type: AxisLegendType) -> Self {
        self.legend_type = legend_type;
        self
    }

    #[must_use]
    pub fn with_value_formatter(mut self, formatter: impl AxisValueFormatter + 'static) -> Self {
        self.set_value_formatter(formatter);
        self
    }

    pub fn set_value_formatter(&mut self, formatter: impl AxisValueFormatter + 'static) {
        self.value_formatter = Some(Arc::new(formatter));
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The custom formatter, or the default fixed-precision formatter using
    /// `decimals`.
    #[must_use]
    pub fn value_formatter(&self) -> Arc<dyn AxisValueFormatter> {
        match &self.value_formatter {
            Some(formatter) => Arc::clone(formatter),
            None => Arc::new(DefaultAxisValueFormatter::new(self.decimals)),
        }
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.value_formatter().string_for_value(value, self)
    }

    /// Label text for entry `index`; empty when the index is out of range.
    #[must_use]
    pub fn formatted_label(&self, index: usize) -> String {
        self.entries
            .get(index)
            .map(|value| self.format_value(*value))
            .unwrap_or_default()
    }

    /// Labels for every entry, bottom entry first.
    #[must_use]
    pub fn formatted_labels(&self) -> Vec<String> {
        (0..self.entry_count())
            .map(|index| self.formatted_label(index))
            .collect()
    }

    pub fn add_limit_line(&mut self, line: LimitLine) {
        self.limit_lines.push(line);
    }

    pub fn remove_limit_line(&mut self, index: usize) -> Option<LimitLine> {
        (index < self.limit_lines.len()).then(|| self.limit_lines.remove(index))
    }

    pub fn remove_all_limit_lines(&mut self) {
        self.limit_lines.clear();
    }

    #[must_use]
    pub fn axis_line_stroke(&self) -> LineStrokeStyle {
        LineStrokeStyle::solid(self.axis_line_width, self.axis_line_color)
            .with_dash(self.axis_line_dash.clone())
    }

    #[must_use]
    pub fn grid_stroke(&self) -> LineStrokeStyle {
        LineStrokeStyle::solid(self.grid_line_width, self.grid_color)
            .with_dash(self.grid_line_dash.clone())
            .with_cap(self.grid_line_cap)
            .with_antialias(self.grid_antialias)
    }

    #[must_use]
    pub fn zero_line_stroke(&self) -> Option<LineStrokeStyle> {
        self.zero_line_color.map(|color| {
            LineStrokeStyle::solid(self.zero_line_width, color)
                .with_dash(self.zero_line_dash.clone())
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.entries.iter().any(|entry| !entry.is_finite()) {
            return Err(ChartError::InvalidData(
                "axis entries must be finite".to_owned(),
            ));
        }
        for (name, value) in [
            ("axis_minimum", self.axis_minimum),
            ("axis_maximum", self.axis_maximum),
            ("axis_low_value", self.axis_low_value),
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("extra_top_offset", self.extra_top_offset),
            ("extra_bottom_offset", self.extra_bottom_offset),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis `{name}` must be finite"
                )));
            }
        }
        if let Some(high) = self.axis_high_value {
            if !high.is_finite() {
                return Err(ChartError::InvalidData(
                    "axis `axis_high_value` must be finite".to_owned(),
                ));
            }
        }
        if !self.space_top.is_finite()
            || !self.space_bottom.is_finite()
            || self.space_top < 0.0
            || self.space_bottom < 0.0
        {
            return Err(ChartError::InvalidData(
                "axis space ratios must be finite and >= 0".to_owned(),
            ));
        }

        self.label_font.validate()?;
        self.legend_auxiliary_titles_font.validate()?;
        self.label_text_color.validate()?;
        self.axis_line_stroke().validate()?;
        self.grid_stroke().validate()?;
        if let Some(stroke) = self.zero_line_stroke() {
            stroke.validate()?;
        }
        for line in &self.limit_lines {
            line.validate()?;
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = YAxisJsonContractV1 {
            schema_version: YAXIS_JSON_SCHEMA_V1,
            axis: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize axis contract v1: {e}"))
        })
    }

    /// Accepts either a bare axis object or a versioned contract payload.
    ///
    /// Custom value formatters are not serialized; reattach them after parsing.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse axis json: {e}")))?;

        let axis = if value.get("schema_version").is_some() {
            let payload: YAxisJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse axis json payload: {e}"))
            })?;
            if payload.schema_version != YAXIS_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported axis schema version: {}",
                    payload.schema_version
                )));
            }
            payload.axis
        } else {
            serde_json::from_value(value)
                .map_err(|e| ChartError::InvalidData(format!("failed to parse axis json: {e}")))?
        };

        axis.validate()?;
        Ok(axis)
    }
}
