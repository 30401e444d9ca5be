use serde::{Deserialize, Serialize};

use crate::core::graph::GraphConfig;
use crate::core::history::{DEFAULT_HISTORY_CAPACITY, HistoryOverflow};
use crate::core::input_buffer::DEFAULT_INPUT_CAPACITY;
use crate::core::{EvaluationPolicy, Rect, Viewport};
use crate::error::{CalcError, CalcResult};
use crate::interaction::{DEFAULT_NAVIGATION_COOLDOWN, KeypadLayout};

use super::validation::validate_calculator_config;

pub const DEFAULT_HISTORY_PREVIEW: usize = 3;
pub const DEFAULT_PLOT_AREA: Rect = Rect::new(120.0, 120.0, 400.0, 300.0);

/// Public calculator bootstrap configuration.
///
/// Serializable so hosts can persist setup; every field has a default, so a
/// partial JSON object is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub viewport: Viewport,
    /// Byte capacity of the input buffer, terminator slot included.
    pub input_capacity: usize,
    pub history_capacity: usize,
    pub history_overflow: HistoryOverflow,
    /// History lines shown on screen, newest first.
    pub history_preview: usize,
    pub evaluation: EvaluationPolicy,
    pub graph: GraphConfig,
    pub keypad_layout: KeypadLayout,
    pub navigation_cooldown_frames: u32,
    pub plot_area: Rect,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            input_capacity: DEFAULT_INPUT_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_overflow: HistoryOverflow::default(),
            history_preview: DEFAULT_HISTORY_PREVIEW,
            evaluation: EvaluationPolicy::default(),
            graph: GraphConfig::default(),
            keypad_layout: KeypadLayout::default(),
            navigation_cooldown_frames: DEFAULT_NAVIGATION_COOLDOWN,
            plot_area: DEFAULT_PLOT_AREA,
        }
    }
}

impl CalculatorConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_input_capacity(mut self, capacity: usize) -> Self {
        self.input_capacity = capacity;
        self
    }

    /// Sets history capacity and what happens once it is reached.
    #[must_use]
    pub fn with_history(mut self, capacity: usize, overflow: HistoryOverflow) -> Self {
        self.history_capacity = capacity;
        self.history_overflow = overflow;
        self
    }

    #[must_use]
    pub fn with_history_preview(mut self, lines: usize) -> Self {
        self.history_preview = lines;
        self
    }

    #[must_use]
    pub fn with_evaluation(mut self, policy: EvaluationPolicy) -> Self {
        self.evaluation = policy;
        self
    }

    #[must_use]
    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }

    #[must_use]
    pub fn with_keypad_layout(mut self, layout: KeypadLayout) -> Self {
        self.keypad_layout = layout;
        self
    }

    #[must_use]
    pub fn with_navigation_cooldown(mut self, frames: u32) -> Self {
        self.navigation_cooldown_frames = frames;
        self
    }

    #[must_use]
    pub fn with_plot_area(mut self, area: Rect) -> Self {
        self.plot_area = area;
        self
    }

    pub fn validate(self) -> CalcResult<Self> {
        validate_calculator_config(self)
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| CalcError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}
