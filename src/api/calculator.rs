use tracing::debug;

use crate::core::input_buffer::EMPTY_DISPLAY;
use crate::core::{
    Evaluator, GraphSampleSet, GraphSampler, HistoryLog, InputBuffer, Viewport,
};
use crate::error::CalcResult;
use crate::interaction::Keypad;
use crate::render::Renderer;

use super::{CalculatorConfig, CalculatorMode};

/// Calculator scene facade consumed by host applications.
///
/// `Calculator` owns the input buffer, display, history, keypad selection
/// and the last graph pass. Hosts call [`update`](Self::update) once per
/// frame and then [`render`](Self::render).
pub struct Calculator<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: CalculatorConfig,
    pub(super) evaluator: Evaluator,
    pub(super) sampler: GraphSampler,
    pub(super) input: InputBuffer,
    pub(super) display: String,
    pub(super) history: HistoryLog,
    pub(super) mode: CalculatorMode,
    pub(super) keypad: Keypad,
    pub(super) graph: GraphSampleSet,
}

impl<R: Renderer> Calculator<R> {
    /// Creates a calculator in its initial state: empty input, display
    /// `"0"`, empty history, `Basic` mode, first button selected.
    pub fn new(renderer: R, config: CalculatorConfig) -> CalcResult<Self> {
        let config = config.validate()?;
        let evaluator = Evaluator::new(config.evaluation);
        let sampler = GraphSampler::new(config.graph, evaluator)?;
        debug!(
            grammar = ?config.evaluation.grammar,
            errors = ?config.evaluation.errors,
            history_capacity = config.history_capacity,
            "calculator created"
        );

        Ok(Self {
            renderer,
            config,
            evaluator,
            sampler,
            input: InputBuffer::with_capacity(config.input_capacity),
            display: EMPTY_DISPLAY.to_owned(),
            history: HistoryLog::new(config.history_capacity, config.history_overflow),
            mode: CalculatorMode::default(),
            keypad: Keypad::new(config.keypad_layout, config.navigation_cooldown_frames),
            graph: GraphSampleSet::empty(config.graph),
        })
    }

    /// Returns every piece of state to its initial value.
    pub fn reset(&mut self) {
        self.input.clear();
        self.display = EMPTY_DISPLAY.to_owned();
        self.history = HistoryLog::new(self.config.history_capacity, self.config.history_overflow);
        self.mode = CalculatorMode::default();
        self.keypad = Keypad::new(
            self.config.keypad_layout,
            self.config.navigation_cooldown_frames,
        );
        self.graph = GraphSampleSet::empty(self.config.graph);
        debug!("calculator reset");
    }

    #[must_use]
    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Text currently shown in the display area.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Raw expression text being edited.
    #[must_use]
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    #[must_use]
    pub fn graph(&self) -> &GraphSampleSet {
        &self.graph
    }

    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.keypad.selected_index()
    }

    /// Invalidates the last graph pass without leaving graphing mode.
    pub fn clear_graph(&mut self) {
        self.graph.clear();
    }

    /// Builds the frame for the current state and hands it to the renderer.
    pub fn render(&mut self) -> CalcResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
