use dashcalc::api::{Calculator, CalculatorConfig, DEFAULT_PLOT_AREA, RenderSnapshot};
use dashcalc::core::{ErrorPolicy, EvaluationPolicy, Grammar, Rect, Viewport};
use dashcalc::interaction::Glyph;
use dashcalc::render::{Color, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive};

fn calculator() -> Calculator<NullRenderer> {
    Calculator::new(NullRenderer::default(), CalculatorConfig::default()).expect("calculator init")
}

#[test]
fn frame_contains_title_display_keypad_and_instructions() {
    let calc = calculator();
    let frame = calc.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");

    assert!(frame.find_text("Calculator - Basic Mode").is_some());
    assert!(frame.find_text("History:").is_some());
    assert!(frame.find_text("GRAPH").is_some());
    assert!(frame.find_text("π").is_some());
    assert!(
        frame
            .find_text("IR/D-Pad: Select | A: Press Button | B: Back")
            .is_some()
    );
    // title, display, history header, 30 labels, instructions
    assert_eq!(frame.texts.len(), 34);
    assert!(frame.lines.is_empty());
}

#[test]
fn selected_button_is_highlighted() {
    let mut calc = calculator();
    calc.activate(Glyph::Digit(1));
    let snapshot = calc.snapshot();
    let frame = snapshot
        .to_render_frame(Viewport::default(), DEFAULT_PLOT_AREA)
        .expect("build frame");

    // rect 0 is the display panel, buttons follow in keypad order
    let selected = frame.rects[1 + snapshot.keypad.selected_index];
    let other = frame.rects[2];
    assert_ne!(selected.fill, other.fill);
}

#[test]
fn history_preview_shows_three_newest_lines() {
    let mut calc = calculator();
    for digit in 1..=4 {
        calc.activate(Glyph::Digit(digit));
        calc.activate(Glyph::Equals);
        calc.activate(Glyph::Clear);
    }

    let snapshot = calc.snapshot();
    assert_eq!(snapshot.history, vec!["4 = 4", "3 = 3", "2 = 2"]);

    let frame = calc.build_render_frame().expect("build frame");
    let first = frame.find_text("4 = 4").expect("newest line");
    let second = frame.find_text("3 = 3").expect("second line");
    assert!(first.y < second.y);
    assert!(frame.find_text("1 = 1").is_none());
}

#[test]
fn graphing_mode_adds_axes_curve_and_labels() {
    let mut calc = calculator();
    calc.append_input("x").expect("fits");
    calc.activate(Glyph::Graph);

    let frame = calc.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");

    // two axes plus 399 curve segments
    assert_eq!(frame.lines.len(), 401);
    assert!(frame.find_text("X: -10.00 to 10.00").is_some());
    assert!(frame.find_text("Y: -12.00 to 11.95").is_some());

    let area = DEFAULT_PLOT_AREA;
    for line in &frame.lines[2..] {
        assert!(line.y1 >= area.y && line.y1 <= area.bottom());
        assert!(line.x1 >= area.x && line.x2 <= area.x + area.width);
    }
}

#[test]
fn failed_samples_break_the_curve() {
    let config = CalculatorConfig::default().with_evaluation(EvaluationPolicy::new(
        Grammar::Precedence,
        ErrorPolicy::Lenient,
    ));
    let mut calc = Calculator::new(NullRenderer::default(), config).expect("calculator init");
    calc.append_input("sqrt(x)").expect("fits");
    calc.activate(Glyph::Graph);

    let frame = calc.build_render_frame().expect("build frame");
    // samples 200..=399 are finite: 199 segments plus two axes
    assert_eq!(frame.lines.len(), 201);
}

#[test]
fn snapshot_frame_rejects_degenerate_graph_range() {
    let mut calc = calculator();
    calc.append_input("x").expect("fits");
    calc.activate(Glyph::Graph);
    let mut snapshot: RenderSnapshot = calc.snapshot();
    if let Some(graph) = snapshot.graph.as_mut() {
        graph.range = (1.0, 1.0);
    }

    assert!(
        snapshot
            .to_render_frame(Viewport::default(), DEFAULT_PLOT_AREA)
            .is_err()
    );
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        12.0,
        Color::WHITE,
        TextHAlign::Left,
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let mut polyline = RenderFrame::new(Viewport::new(640, 480));
    polyline.push_polyline([(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], 1.0, Color::WHITE);
    assert_eq!(polyline.lines.len(), 2);
    renderer.render(&polyline).expect("valid frame");
    assert_eq!(renderer.last_line_count, 2);
}

#[test]
fn zero_sized_viewport_is_invalid() {
    let frame = RenderFrame::new(Viewport::new(0, 0));
    assert!(frame.validate().is_err());
    assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
}
