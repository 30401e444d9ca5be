use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel-sampling")]
use rayon::prelude::*;

use crate::core::evaluator::{Evaluator, PreparedExpression};
use crate::error::{CalcError, CalcResult};

/// Free variable bound while sampling.
pub const GRAPH_VARIABLE: &str = "x";
pub const DEFAULT_RESOLUTION: usize = 400;
pub const DEFAULT_MIN_X: f64 = -10.0;
pub const DEFAULT_MAX_X: f64 = 10.0;

/// Where sample values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlotSource {
    /// Evaluate the function text with `x` bound to each sample position.
    #[default]
    Expression,
    /// Ignore the function text and plot `y = x^2`.
    SquarePlaceholder,
}

/// Sampling domain and range tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub resolution: usize,
    /// Fraction of the y span added below and above the data.
    pub padding_ratio: f64,
    /// Span used when every finite sample has the same value.
    pub min_span_absolute: f64,
    pub source: PlotSource,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
            resolution: DEFAULT_RESOLUTION,
            padding_ratio: 0.10,
            min_span_absolute: 1.0,
            source: PlotSource::Expression,
        }
    }
}

impl GraphConfig {
    pub fn validate(self) -> CalcResult<Self> {
        if !self.min_x.is_finite() || !self.max_x.is_finite() || self.min_x >= self.max_x {
            return Err(CalcError::InvalidConfig(
                "graph domain must be finite with min_x < max_x".to_owned(),
            ));
        }
        if self.resolution == 0 {
            return Err(CalcError::InvalidConfig(
                "graph resolution must be > 0".to_owned(),
            ));
        }
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(CalcError::InvalidConfig(
                "graph padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(CalcError::InvalidConfig(
                "graph min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// X position of sample `index`; `max_x` itself is never sampled.
    #[must_use]
    pub fn x_at(self, index: usize) -> f64 {
        self.min_x + (self.max_x - self.min_x) * index as f64 / self.resolution as f64
    }
}

/// Fixed-resolution plot data with domain/range metadata.
///
/// Samples that failed to evaluate, or evaluated to a non-finite value, are
/// stored as NaN and left out of the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSampleSet {
    samples: Vec<f64>,
    domain: (f64, f64),
    range: (f64, f64),
    valid: bool,
}

impl GraphSampleSet {
    /// Invalid set over the configured domain, range defaulting to the domain.
    #[must_use]
    pub fn empty(config: GraphConfig) -> Self {
        Self {
            samples: Vec::new(),
            domain: (config.min_x, config.max_x),
            range: (config.min_x, config.max_x),
            valid: false,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn invalid_sample_count(&self) -> usize {
        self.samples.iter().filter(|y| y.is_nan()).count()
    }

    /// `(x, y)` pairs in sampling order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let (min_x, max_x) = self.domain;
        let count = self.samples.len().max(1) as f64;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, y)| (min_x + (max_x - min_x) * i as f64 / count, *y))
    }

    pub fn clear(&mut self) {
        self.valid = false;
    }

    #[must_use]
    pub fn x_axis_label(&self) -> String {
        format!("X: {:.2} to {:.2}", self.domain.0, self.domain.1)
    }

    #[must_use]
    pub fn y_axis_label(&self) -> String {
        format!("Y: {:.2} to {:.2}", self.range.0, self.range.1)
    }
}

/// Samples function text over a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphSampler {
    config: GraphConfig,
    evaluator: Evaluator,
}

impl GraphSampler {
    pub fn new(config: GraphConfig, evaluator: Evaluator) -> CalcResult<Self> {
        Ok(Self {
            config: config.validate()?,
            evaluator,
        })
    }

    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Runs one full sampling pass.
    ///
    /// Individual failures become NaN samples; the pass itself never fails.
    /// The set is valid when at least one sample is finite.
    #[must_use]
    pub fn sample(&self, function_text: &str) -> GraphSampleSet {
        let prepared = self.evaluator.prepare(function_text, GRAPH_VARIABLE);
        let samples = self.collect_samples(&prepared);

        let mut set = GraphSampleSet::empty(self.config);
        let finite = || samples.iter().copied().filter(|y| y.is_finite());
        let extremes = finite()
            .map(OrderedFloat)
            .min()
            .zip(finite().map(OrderedFloat).max());

        match extremes {
            Some((OrderedFloat(min_y), OrderedFloat(max_y))) => {
                set.range = self.padded_range(min_y, max_y);
                set.valid = true;
            }
            None => {
                debug!(input = function_text, "graph pass produced no finite samples");
            }
        }
        set.samples = samples;

        debug!(
            input = function_text,
            valid = set.valid,
            invalid_samples = set.invalid_sample_count(),
            min_y = set.range.0,
            max_y = set.range.1,
            "graph sampled"
        );
        set
    }

    fn collect_samples(&self, prepared: &PreparedExpression) -> Vec<f64> {
        let config = self.config;

        #[cfg(feature = "parallel-sampling")]
        {
            (0..config.resolution)
                .into_par_iter()
                .map(|i| sample_one(config, prepared, i))
                .collect()
        }

        #[cfg(not(feature = "parallel-sampling"))]
        {
            (0..config.resolution)
                .map(|i| sample_one(config, prepared, i))
                .collect()
        }
    }

    fn padded_range(&self, min_y: f64, max_y: f64) -> (f64, f64) {
        let (min_y, max_y) = if min_y == max_y {
            let half = self.config.min_span_absolute / 2.0;
            (min_y - half, max_y + half)
        } else {
            (min_y, max_y)
        };
        let pad = (max_y - min_y) * self.config.padding_ratio;
        (min_y - pad, max_y + pad)
    }
}

fn sample_one(config: GraphConfig, prepared: &PreparedExpression, index: usize) -> f64 {
    let x = config.x_at(index);
    let y = match config.source {
        PlotSource::SquarePlaceholder => x * x,
        PlotSource::Expression => match prepared.evaluate_at(x) {
            Ok(y) => y,
            Err(err) => {
                trace!(x, error = %err, "sample failed");
                f64::NAN
            }
        },
    };
    if y.is_finite() { y } else { f64::NAN }
}
