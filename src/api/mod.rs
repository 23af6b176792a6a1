mod axis_config;
mod label_layout;
mod limit_line;
mod value_formatter;
mod y_axis_renderer;

pub use axis_config::{
    AxisDependency, AxisLegendType, YAXIS_JSON_SCHEMA_V1, YAxis, YAxisLabelAnchor,
    YAxisLabelPosition,
};
pub use label_layout::{centered_in_band_x, fixed_label_anchor, suppress_duplicate_labels};
pub use limit_line::{
    LIMIT_LINE_MAX_WIDTH_PX, LIMIT_LINE_MIN_WIDTH_PX, LimitLabelPosition, LimitLine,
};
pub use value_formatter::{AxisValueFormatter, DefaultAxisValueFormatter};
pub use y_axis_renderer::YAxisRenderer;
