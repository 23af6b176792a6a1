use approx::assert_relative_eq;
use chart_yaxis::api::{AxisDependency, LimitLabelPosition, LimitLine, YAxis, YAxisRenderer};
use chart_yaxis::core::{Point, Rect, Transformer, ViewPortHandler, Viewport};
use chart_yaxis::render::{Color, LineCap, LineDash, RenderFrame, TextHAlign};

fn view_port() -> ViewPortHandler {
    ViewPortHandler::new(400.0, 300.0)
        .and_then(|h| h.with_offsets(40.0, 10.0, 20.0, 30.0))
        .expect("view port")
}

fn renderer_with_range(axis: YAxis, y_min: f64, delta_y: f64) -> YAxisRenderer {
    let view_port = view_port();
    let transformer = Transformer::for_value_range(&view_port, 0.0, 1.0, y_min, delta_y, false)
        .expect("transformer");
    YAxisRenderer::new(view_port, axis, Some(transformer))
}

fn renderer_for(axis: YAxis) -> YAxisRenderer {
    renderer_with_range(axis, 0.0, 100.0)
}

fn empty_frame() -> RenderFrame {
    RenderFrame::new(Viewport::new(400, 300))
}

#[test]
fn left_axis_line_spans_content_height() {
    let mut frame = empty_frame();
    renderer_for(YAxis::default()).render_axis_line(&mut frame);

    assert_eq!(frame.lines.len(), 1);
    let line = &frame.lines[0];
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (40.0, 10.0, 40.0, 270.0));
    assert_eq!(line.stroke.width, 0.5);
    assert!(line.stroke.dash.is_none());
    assert!(line.clip.is_none());
}

#[test]
fn right_axis_line_honors_extra_offsets_and_dash() {
    let mut axis = YAxis::new(AxisDependency::Right);
    axis.extra_top_offset = 3.0;
    axis.extra_bottom_offset = 4.0;
    axis.axis_line_dash = Some(LineDash::new(1.0, &[4.0, 2.0]));

    let mut frame = empty_frame();
    renderer_for(axis).render_axis_line(&mut frame);

    let line = &frame.lines[0];
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (380.0, 7.0, 380.0, 274.0));
    assert_eq!(line.stroke.dash, Some(LineDash::new(1.0, &[4.0, 2.0])));
}

#[test]
fn disabled_axis_line_is_skipped() {
    let mut axis = YAxis::default();
    axis.draw_axis_line = false;
    let mut frame = empty_frame();
    renderer_for(axis).render_axis_line(&mut frame);
    assert!(frame.lines.is_empty());
}

#[test]
fn grid_lines_cross_content_and_clip_to_expanded_rect() {
    let mut axis = YAxis::default().with_entries(vec![0.0, 50.0, 100.0], 0.0, 100.0);
    axis.grid_line_cap = LineCap::Round;
    axis.grid_antialias = false;
    let renderer = renderer_for(axis);

    let mut frame = empty_frame();
    renderer.render_grid_lines(&mut frame);

    assert_eq!(frame.lines.len(), 3);
    let expected_clip = Rect::new(40.0, 9.75, 340.0, 260.5);
    assert_eq!(renderer.grid_clipping_rect(), expected_clip);
    for (line, y) in frame.lines.iter().zip([270.0, 140.0, 10.0]) {
        assert_eq!((line.x1, line.x2), (40.0, 380.0));
        assert_relative_eq!(line.y1, y, epsilon = 1e-9);
        assert_eq!(line.y1, line.y2);
        assert_eq!(line.clip, Some(expected_clip));
        assert_eq!(line.stroke.cap, LineCap::Round);
        assert!(!line.stroke.antialias);
    }
}

#[test]
fn draw_grid_line_uses_grid_style() {
    let renderer = renderer_for(YAxis::default());
    let mut frame = empty_frame();
    let stroke = renderer.axis().grid_stroke();
    let clip = renderer.grid_clipping_rect();
    renderer.draw_grid_line(&mut frame, Point::new(0.0, 123.0), &stroke, clip);

    let line = &frame.lines[0];
    assert_eq!(line.y1, 123.0);
    assert_eq!(line.x1, 40.0);
    assert_eq!(line.x2, 380.0);
    assert_eq!(line.stroke, stroke);
    assert_eq!(line.clip, Some(clip));
}

#[test]
fn zero_line_is_drawn_even_without_grid() {
    let mut axis = YAxis::default().with_entries(vec![-50.0, 0.0, 50.0], -50.0, 50.0);
    axis.draw_grid_lines = false;
    axis.draw_zero_line = true;
    axis.zero_line_color = Some(Color::BLACK);
    axis.zero_line_width = 2.0;

    let mut frame = empty_frame();
    renderer_with_range(axis, -50.0, 100.0).render_grid_lines(&mut frame);

    assert_eq!(frame.lines.len(), 1);
    let line = &frame.lines[0];
    assert_relative_eq!(line.y1, 140.0, epsilon = 1e-9);
    assert_eq!(line.stroke.color, Color::BLACK);
    assert_eq!(line.clip, Some(Rect::new(40.0, 9.0, 340.0, 262.0)));
}

#[test]
fn disabled_axis_draws_no_grid_or_zero_line() {
    let mut axis = YAxis::default().with_entries(vec![0.0, 100.0], 0.0, 100.0);
    axis.enabled = false;
    axis.draw_zero_line = true;
    let mut frame = empty_frame();
    renderer_for(axis).render_grid_lines(&mut frame);
    assert!(frame.lines.is_empty());
}

#[test]
fn zero_line_needs_transformer() {
    let mut axis = YAxis::default();
    axis.draw_zero_line = true;
    let renderer = YAxisRenderer::new(view_port(), axis, None);
    let mut frame = empty_frame();
    renderer.draw_zero_line(&mut frame);
    assert!(frame.lines.is_empty());
}

fn limit_renderer(position: LimitLabelPosition) -> YAxisRenderer {
    let mut axis = YAxis::default();
    axis.add_limit_line(LimitLine::new(50.0, "target").with_label_position(position));
    renderer_for(axis)
}

#[test]
fn limit_line_spans_content_with_own_clip() {
    let mut frame = empty_frame();
    limit_renderer(LimitLabelPosition::RightTop).render_limit_lines(&mut frame);

    assert_eq!(frame.lines.len(), 1);
    let line = &frame.lines[0];
    assert_eq!((line.x1, line.x2), (40.0, 380.0));
    assert_relative_eq!(line.y1, 140.0, epsilon = 1e-9);
    assert_eq!(line.stroke.width, 2.0);
    assert_eq!(line.clip, Some(Rect::new(40.0, 9.0, 340.0, 262.0)));
}

#[test]
fn limit_label_positions_follow_corner() {
    let cases = [
        (LimitLabelPosition::RightTop, 376.0, 122.4, TextHAlign::Right),
        (LimitLabelPosition::RightBottom, 376.0, 142.0, TextHAlign::Right),
        (LimitLabelPosition::LeftTop, 44.0, 122.4, TextHAlign::Left),
        (LimitLabelPosition::LeftBottom, 44.0, 142.0, TextHAlign::Left),
    ];

    for (position, x, y, align) in cases {
        let mut frame = empty_frame();
        limit_renderer(position).render_limit_lines(&mut frame);

        assert_eq!(frame.texts.len(), 1, "{position:?}");
        let text = &frame.texts[0];
        assert_eq!(text.text, "target");
        assert_relative_eq!(text.x, x, epsilon = 1e-9);
        assert_relative_eq!(text.y, y, epsilon = 1e-9);
        assert_eq!(text.h_align, align);
    }
}

#[test]
fn limit_label_offsets_are_applied() {
    let mut axis = YAxis::default();
    let mut line = LimitLine::new(50.0, "max");
    line.x_offset = 6.0;
    line.y_offset = 2.0;
    axis.add_limit_line(line);

    let mut frame = empty_frame();
    renderer_for(axis).render_limit_lines(&mut frame);
    let text = &frame.texts[0];
    assert_relative_eq!(text.x, 370.0, epsilon = 1e-9);
    assert_relative_eq!(text.y, 120.4, epsilon = 1e-9);
}

#[test]
fn disabled_or_unlabelled_limit_lines() {
    let mut axis = YAxis::default();
    let mut disabled = LimitLine::new(10.0, "off");
    disabled.enabled = false;
    let mut hidden_label = LimitLine::new(20.0, "hidden");
    hidden_label.draw_label = false;
    axis.add_limit_line(disabled);
    axis.add_limit_line(hidden_label);
    axis.add_limit_line(LimitLine::new(30.0, ""));

    let mut frame = empty_frame();
    renderer_for(axis).render_limit_lines(&mut frame);

    assert_eq!(frame.lines.len(), 2);
    assert!(frame.texts.is_empty());
}

#[test]
fn limit_lines_need_transformer() {
    let mut axis = YAxis::default();
    axis.add_limit_line(LimitLine::new(50.0, "target"));
    let renderer = YAxisRenderer::new(view_port(), axis, None);
    let mut frame = empty_frame();
    renderer.render_limit_lines(&mut frame);
    assert!(frame.is_empty());
}
