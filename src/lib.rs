//! chart-yaxis: value-axis renderer for Rust charting backends.
//!
//! Turns an axis configuration, a view-port description and a value-to-pixel
//! transform into backend-agnostic draw primitives: value labels, the axis
//! line, grid lines, the zero line and limit lines.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{YAxis, YAxisRenderer};
pub use error::{ChartError, ChartResult};
