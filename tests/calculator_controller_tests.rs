use dashcalc::api::{Calculator, CalculatorConfig, CalculatorMode, ERROR_DISPLAY, FrameOutcome};
use dashcalc::core::{ErrorPolicy, EvaluationPolicy, Grammar, HistoryEntry};
use dashcalc::interaction::{Glyph, InputSnapshot, KEYPAD_GLYPHS, Operator};
use dashcalc::render::NullRenderer;
use dashcalc::{CalcError, SceneNavigator};

#[derive(Debug, Default)]
struct RecordingNavigator {
    requests: usize,
}

impl SceneNavigator for RecordingNavigator {
    fn request_parent_scene(&mut self) {
        self.requests += 1;
    }
}

fn calculator() -> Calculator<NullRenderer> {
    Calculator::new(NullRenderer::default(), CalculatorConfig::default()).expect("calculator init")
}

fn index_of(glyph: Glyph) -> usize {
    KEYPAD_GLYPHS
        .iter()
        .position(|candidate| *candidate == glyph)
        .expect("glyph on keypad")
}

/// Points at the glyph's button and confirms in the same frame.
fn press(calc: &mut Calculator<NullRenderer>, glyph: Glyph) -> FrameOutcome {
    let (x, y) = calc.keypad().button_rect(index_of(glyph)).center();
    let input = InputSnapshot::idle().with_pointer(x, y).with_confirm();
    calc.update(input, &mut RecordingNavigator::default())
}

fn type_keys(calc: &mut Calculator<NullRenderer>, keys: &str) {
    for key in keys.chars() {
        let glyph = match key {
            '0'..='9' => Glyph::Digit(key.to_digit(10).map_or(0, |d| d as u8)),
            '.' => Glyph::Decimal,
            '+' => Glyph::Operator(Operator::Add),
            '-' => Glyph::Operator(Operator::Subtract),
            '*' => Glyph::Operator(Operator::Multiply),
            '/' => Glyph::Operator(Operator::Divide),
            '^' => Glyph::Operator(Operator::Power),
            '(' => Glyph::OpenParen,
            ')' => Glyph::CloseParen,
            '=' => Glyph::Equals,
            other => panic!("no key for {other:?}"),
        };
        assert_eq!(press(calc, glyph), FrameOutcome::Activated(glyph));
    }
}

#[test]
fn starts_in_initial_state() {
    let calc = calculator();
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.input(), "");
    assert!(calc.history().is_empty());
    assert_eq!(calc.mode(), CalculatorMode::Basic);
    assert_eq!(calc.selected_index(), 0);
    assert!(!calc.graph().is_valid());
}

#[test]
fn equals_evaluates_records_and_continues_from_result() {
    let mut calc = calculator();
    type_keys(&mut calc, "2+3");
    assert_eq!(calc.display(), "2+3");

    type_keys(&mut calc, "=");
    assert_eq!(calc.display(), "5");
    assert_eq!(calc.input(), "5");
    assert_eq!(
        calc.history().most_recent(1)[0],
        &HistoryEntry::new("2+3", "5")
    );

    type_keys(&mut calc, "*4=");
    assert_eq!(calc.display(), "20");
    assert_eq!(calc.history().len(), 2);
}

fn precedence_calculator() -> Calculator<NullRenderer> {
    let config = CalculatorConfig::default().with_evaluation(EvaluationPolicy::new(
        Grammar::Precedence,
        ErrorPolicy::Lenient,
    ));
    Calculator::new(NullRenderer::default(), config).expect("calculator init")
}

#[test]
fn default_grammar_keeps_its_grouping_limitation() {
    let mut calc = calculator();
    type_keys(&mut calc, "(2+3)*4=");
    assert_eq!(calc.display(), "12");
}

#[test]
fn precedence_grammar_groups_parentheses_when_requested() {
    let mut calc = precedence_calculator();
    type_keys(&mut calc, "(2+3)*4=");
    assert_eq!(calc.display(), "20");
}

#[test]
fn infinite_result_chains_into_the_next_evaluation() {
    let mut calc = precedence_calculator();
    type_keys(&mut calc, "10^400=");
    assert_eq!(calc.display(), "inf");
    assert_eq!(calc.input(), "inf");

    type_keys(&mut calc, "=");
    assert_eq!(calc.display(), "inf");
    assert_eq!(
        calc.history().most_recent(1)[0],
        &HistoryEntry::new("inf", "inf")
    );

    type_keys(&mut calc, "*2=");
    assert_eq!(calc.display(), "inf");
}

#[test]
fn equals_on_empty_input_records_zero() {
    let mut calc = calculator();
    type_keys(&mut calc, "=");
    assert_eq!(calc.display(), "0");
    assert_eq!(
        calc.history().most_recent(1)[0],
        &HistoryEntry::new("0", "0")
    );
}

#[test]
fn history_stops_growing_after_ten_entries() {
    let mut calc = calculator();
    for _ in 0..11 {
        type_keys(&mut calc, "=");
    }
    assert_eq!(calc.history().len(), 10);
}

#[test]
fn delete_back_to_empty_shows_zero() {
    let mut calc = calculator();
    type_keys(&mut calc, "12");
    press(&mut calc, Glyph::Delete);
    assert_eq!(calc.display(), "1");
    press(&mut calc, Glyph::Delete);
    assert_eq!(calc.display(), "0");
    press(&mut calc, Glyph::Delete);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.input(), "");
}

#[test]
fn clear_resets_input_and_display() {
    let mut calc = calculator();
    type_keys(&mut calc, "7*8");
    press(&mut calc, Glyph::Clear);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.input(), "");
}

#[test]
fn function_and_constant_glyphs_append_text() {
    let mut calc = calculator();
    press(&mut calc, Glyph::Function(dashcalc::core::MathFunction::Sin));
    type_keys(&mut calc, "90)");
    assert_eq!(calc.input(), "sin(90)");
    type_keys(&mut calc, "=");
    assert_eq!(calc.display(), "1");

    press(&mut calc, Glyph::Clear);
    press(&mut calc, Glyph::Pi);
    assert_eq!(calc.display(), "3.14159265");
    press(&mut calc, Glyph::Euler);
    assert_eq!(calc.input(), "3.141592652.71828183");
}

#[test]
fn mode_glyph_cycles_through_four_modes() {
    let mut calc = calculator();
    let mut seen = Vec::new();
    for _ in 0..4 {
        press(&mut calc, Glyph::Mode);
        seen.push(calc.mode());
    }
    assert_eq!(
        seen,
        vec![
            CalculatorMode::Scientific,
            CalculatorMode::Graphing,
            CalculatorMode::Equation,
            CalculatorMode::Basic
        ]
    );
}

#[test]
fn graph_glyph_switches_mode_and_samples_input() {
    let mut calc = calculator();
    calc.append_input("x^2").expect("fits");
    press(&mut calc, Glyph::Graph);

    assert_eq!(calc.mode(), CalculatorMode::Graphing);
    assert!(calc.graph().is_valid());
    assert_eq!(calc.graph().samples().len(), 400);
    assert!(calc.snapshot().graph.is_some());

    calc.clear_graph();
    assert!(calc.snapshot().graph.is_none());
}

#[test]
fn back_trigger_requests_parent_scene_and_skips_the_frame() {
    let mut calc = calculator();
    let mut navigator = RecordingNavigator::default();
    let (x, y) = calc.keypad().button_rect(7).center();
    let input = InputSnapshot::idle()
        .with_back()
        .with_confirm()
        .with_pointer(x, y)
        .with_dpad(1, 0);

    let outcome = calc.update(input, &mut navigator);

    assert_eq!(outcome, FrameOutcome::ExitRequested);
    assert_eq!(navigator.requests, 1);
    assert_eq!(calc.selected_index(), 0);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.keypad().cooldown(), 0);
}

#[test]
fn closures_can_act_as_navigators() {
    let mut calc = calculator();
    let mut exits = 0;
    let mut navigator = || exits += 1;
    calc.update(InputSnapshot::idle().with_back(), &mut navigator);
    assert_eq!(exits, 1);
}

#[test]
fn directional_move_applies_before_activation() {
    let mut calc = calculator();
    let input = InputSnapshot::idle().with_dpad(1, 0).with_confirm();
    let outcome = calc.update(input, &mut RecordingNavigator::default());

    assert_eq!(outcome, FrameOutcome::Activated(Glyph::Digit(8)));
    assert_eq!(calc.display(), "8");

    let idle = calc.update(InputSnapshot::idle(), &mut RecordingNavigator::default());
    assert_eq!(idle, FrameOutcome::Idle);
}

#[test]
fn full_buffer_rejects_appends_without_changing_state() {
    let config = CalculatorConfig::default().with_input_capacity(4);
    let mut calc = Calculator::new(NullRenderer::default(), config).expect("calculator init");
    type_keys(&mut calc, "123");

    assert_eq!(
        press(&mut calc, Glyph::Digit(4)),
        FrameOutcome::Rejected(Glyph::Digit(4))
    );
    assert_eq!(calc.input(), "123");
    assert_eq!(calc.display(), "123");
    assert!(!calc.activate(Glyph::Pi));
    assert_eq!(
        calc.append_input("9"),
        Err(CalcError::BufferFull { capacity: 4 })
    );

    assert!(calc.activate(Glyph::Delete));
    assert_eq!(press(&mut calc, Glyph::Digit(9)), FrameOutcome::Activated(Glyph::Digit(9)));
    assert_eq!(calc.input(), "129");
}

#[test]
fn strict_failure_shows_error_and_keeps_state() {
    let config = CalculatorConfig::default().with_evaluation(EvaluationPolicy::new(
        Grammar::Precedence,
        ErrorPolicy::Strict,
    ));
    let mut calc = Calculator::new(NullRenderer::default(), config).expect("calculator init");
    type_keys(&mut calc, "1/0=");

    assert_eq!(calc.display(), ERROR_DISPLAY);
    assert_eq!(calc.input(), "1/0");
    assert!(calc.history().is_empty());
}

#[test]
fn reset_restores_initial_state() {
    let mut calc = calculator();
    type_keys(&mut calc, "9=");
    press(&mut calc, Glyph::Mode);
    calc.reset();

    assert_eq!(calc.display(), "0");
    assert!(calc.history().is_empty());
    assert_eq!(calc.mode(), CalculatorMode::Basic);
    assert_eq!(calc.selected_index(), 0);
}

#[test]
fn render_hands_a_valid_frame_to_the_renderer() {
    let mut calc = calculator();
    type_keys(&mut calc, "1+1=");
    calc.render().expect("render");

    let renderer = calc.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 31);
    let frame = renderer.last_frame.expect("frame kept");
    assert!(frame.find_text("1+1 = 2").is_some());
    assert!(frame.find_text("Calculator - Basic Mode").is_some());
}
