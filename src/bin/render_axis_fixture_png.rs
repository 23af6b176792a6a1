use std::fs::{self, File};
use std::path::PathBuf;

use chart_yaxis::api::{YAxis, YAxisRenderer};
use chart_yaxis::core::{Transformer, ViewPortHandler};
use chart_yaxis::render::{CairoRenderer, PangoTextMeasurer};
use serde::Deserialize;
use tracing::info;

const DEFAULT_OUTPUT_PATH: &str = "y_axis.png";

#[derive(Debug, Deserialize)]
struct AxisFixture {
    schema_version: u32,
    chart: FixtureChart,
    value_range: [f64; 2],
    #[serde(default)]
    inverted: bool,
    #[serde(default)]
    axis_maximum_value: Option<f64>,
    axis: YAxis,
}

#[derive(Debug, Deserialize)]
struct FixtureChart {
    width: u32,
    height: u32,
    /// left, top, right, bottom
    offsets: [f64; 4],
}

struct CliArgs {
    fixture_path: PathBuf,
    output_path: PathBuf,
}

fn main() {
    let _ = chart_yaxis::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.fixture_path).map_err(|err| {
        format!(
            "failed to read fixture `{}`: {err}",
            args.fixture_path.display()
        )
    })?;
    let fixture: AxisFixture =
        serde_json::from_str(&raw).map_err(|err| format!("failed to parse fixture json: {err}"))?;
    if fixture.schema_version != 1 {
        return Err(format!(
            "unsupported fixture schema version: {}",
            fixture.schema_version
        ));
    }

    let renderer = build_renderer(&fixture).map_err(|err| format!("fixture setup failed: {err}"))?;
    let width = i32::try_from(fixture.chart.width)
        .map_err(|_| "chart width overflows i32".to_owned())?;
    let height = i32::try_from(fixture.chart.height)
        .map_err(|_| "chart height overflows i32".to_owned())?;

    let mut cairo_renderer =
        CairoRenderer::new(width, height).map_err(|err| format!("renderer init failed: {err}"))?;
    renderer
        .render_with(&mut cairo_renderer)
        .map_err(|err| format!("render failed: {err}"))?;

    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    cairo_renderer
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", args.output_path.display()))?;

    let stats = cairo_renderer.last_stats();
    info!(
        lines = stats.lines_drawn,
        texts = stats.texts_drawn,
        output = %args.output_path.display(),
        "rendered y-axis fixture"
    );
    Ok(())
}

fn build_renderer(
    fixture: &AxisFixture,
) -> chart_yaxis::ChartResult<YAxisRenderer<PangoTextMeasurer>> {
    let [left, top, right, bottom] = fixture.chart.offsets;
    let view_port = ViewPortHandler::new(
        f64::from(fixture.chart.width),
        f64::from(fixture.chart.height),
    )?
    .with_offsets(left, top, right, bottom)?;

    let [min, max] = fixture.value_range;
    let transformer =
        Transformer::for_value_range(&view_port, 0.0, 1.0, min, max - min, fixture.inverted)?;
    let axis = fixture.axis.clone();
    axis.validate()?;

    let mut renderer = YAxisRenderer::new(view_port, axis, Some(transformer))
        .with_measurer(PangoTextMeasurer::new()?);
    renderer.set_axis_maximum_value(fixture.axis_maximum_value);
    Ok(renderer)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut fixture_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fixture" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --fixture".to_owned())?;
                fixture_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let fixture_path =
        fixture_path.ok_or_else(|| format!("missing --fixture\n\n{}", usage_message()))?;
    Ok(CliArgs {
        fixture_path,
        output_path,
    })
}

fn usage_message() -> String {
    format!(
        "usage: render_axis_fixture_png --fixture <path> [--output <path>]\n\
         \n\
         Renders one y-axis fixture (schema v1) to a PNG.\n\
         default output: {DEFAULT_OUTPUT_PATH}"
    )
}
