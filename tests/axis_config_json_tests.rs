use chart_yaxis::ChartError;
use chart_yaxis::api::{
    AxisDependency, AxisLegendType, AxisValueFormatter, LimitLabelPosition, LimitLine, YAxis,
    YAxisLabelPosition,
};
use chart_yaxis::render::LineDash;

#[derive(Debug)]
struct UsdFormatter;

impl AxisValueFormatter for UsdFormatter {
    fn string_for_value(&self, value: f64, _axis: &YAxis) -> String {
        format!("${value:.2}")
    }
}

fn configured_axis() -> YAxis {
    let mut axis = YAxis::new(AxisDependency::Right)
        .with_entries(vec![0.0, 10.0, 20.0], 0.0, 22.0)
        .with_label_position(YAxisLabelPosition::InsideChart)
        .with_legend_type(AxisLegendType::LowHigh);
    axis.legend_auxiliary_titles = vec!["L".to_owned(), "H".to_owned()];
    axis.grid_line_dash = Some(LineDash::new(0.0, &[3.0, 3.0]));
    axis.add_limit_line(
        LimitLine::new(15.0, "target").with_label_position(LimitLabelPosition::LeftBottom),
    );
    axis
}

#[test]
fn contract_v1_round_trip_preserves_configuration() {
    let axis = configured_axis();
    let json = axis.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = YAxis::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.axis_dependency, AxisDependency::Right);
    assert_eq!(parsed.label_position, YAxisLabelPosition::InsideChart);
    assert_eq!(parsed.legend_type, AxisLegendType::LowHigh);
    assert_eq!(parsed.entries, axis.entries);
    assert_eq!(parsed.grid_line_dash, axis.grid_line_dash);
    assert_eq!(parsed.limit_lines, axis.limit_lines);
}

#[test]
fn bare_partial_axis_object_uses_defaults() {
    let parsed = YAxis::from_json_compat_str(
        r#"{ "entries": [1.0, 2.0], "axis_maximum": 2.0, "decimals": 1 }"#,
    )
    .expect("parse");

    assert_eq!(parsed.entry_count(), 2);
    assert_eq!(parsed.formatted_label(1), "2.0");
    assert!(parsed.draw_grid_lines);
    assert_eq!(parsed.x_offset, 5.0);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = YAxis::from_json_compat_str(r#"{ "schema_version": 9, "axis": {} }"#)
        .expect_err("unsupported version");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("version")));
}

#[test]
fn invalid_values_fail_validation_after_parsing() {
    let err = YAxis::from_json_compat_str(r#"{ "space_top": -1.0 }"#).expect_err("negative space");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn limit_line_width_outside_clamp_range_is_rejected() {
    let err = YAxis::from_json_compat_str(
        r#"{ "limit_lines": [ { "limit": 1.0, "line_width": 40.0 } ] }"#,
    )
    .expect_err("oversized limit line width");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("width")));

    let parsed = YAxis::from_json_compat_str(
        r#"{ "limit_lines": [ { "limit": 1.0, "line_width": 12.0 } ] }"#,
    )
    .expect("width at the clamp bound");
    assert_eq!(parsed.limit_lines[0].line_width, 12.0);
}

#[test]
fn custom_formatter_is_not_serialized_and_can_be_reattached() {
    let axis = configured_axis().with_value_formatter(UsdFormatter);
    assert_eq!(axis.formatted_label(1), "$10.00");

    let json = axis.to_json_contract_v1_pretty().expect("serialize");
    let mut parsed = YAxis::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.formatted_label(1), "10");

    parsed.set_value_formatter(UsdFormatter);
    assert_eq!(parsed.formatted_label(1), "$10.00");
}

#[test]
fn png_fixture_axis_section_parses() {
    let fixture: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/y_axis_low_high.json")).expect("fixture json");
    let axis = YAxis::from_json_compat_str(&fixture["axis"].to_string()).expect("axis");

    assert_eq!(axis.legend_type, AxisLegendType::LowHigh);
    assert_eq!(axis.limit_lines.len(), 1);
    assert_eq!(axis.limit_lines[0].label_position, LimitLabelPosition::LeftTop);
    assert!(axis.limit_lines[0].enabled);
}
