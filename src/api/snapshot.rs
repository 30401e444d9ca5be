use serde::{Deserialize, Serialize};

use crate::core::GraphSampleSet;
use crate::interaction::{Glyph, KeypadLayout};
use crate::render::Renderer;

use super::{Calculator, CalculatorMode};

/// Keypad state as presented on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypadSnapshot {
    pub glyphs: Vec<Glyph>,
    pub layout: KeypadLayout,
    pub selected_index: usize,
}

/// Plot data as presented on screen. Failed samples are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub samples: Vec<Option<f64>>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl GraphSnapshot {
    #[must_use]
    pub fn from_sample_set(set: &GraphSampleSet) -> Self {
        Self {
            domain: set.domain(),
            range: set.range(),
            samples: set
                .samples()
                .iter()
                .map(|y| y.is_finite().then_some(*y))
                .collect(),
            x_axis_label: set.x_axis_label(),
            y_axis_label: set.y_axis_label(),
        }
    }

    /// `(x, y)` pairs in sampling order.
    pub fn points(&self) -> impl Iterator<Item = (f64, Option<f64>)> + '_ {
        let (min_x, max_x) = self.domain;
        let count = self.samples.len().max(1) as f64;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, y)| (min_x + (max_x - min_x) * i as f64 / count, *y))
    }
}

/// Everything a renderer needs for one frame, detached from the calculator.
///
/// Serializable so regression tooling can diff frames without a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub title: String,
    pub mode: CalculatorMode,
    pub display: String,
    /// `"expr = result"` lines, newest first.
    pub history: Vec<String>,
    pub keypad: KeypadSnapshot,
    /// Present only in graphing mode with a valid sample set.
    pub graph: Option<GraphSnapshot>,
}

impl<R: Renderer> Calculator<R> {
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        let graph = (self.mode == CalculatorMode::Graphing && self.graph.is_valid())
            .then(|| GraphSnapshot::from_sample_set(&self.graph));

        RenderSnapshot {
            title: self.mode.title(),
            mode: self.mode,
            display: self.display.clone(),
            history: self
                .history
                .most_recent(self.config.history_preview)
                .into_iter()
                .map(|entry| entry.line())
                .collect(),
            keypad: KeypadSnapshot {
                glyphs: self.keypad.glyphs().to_vec(),
                layout: self.keypad.layout(),
                selected_index: self.keypad.selected_index(),
            },
            graph,
        }
    }
}
