//! dashcalc: frame-driven scientific calculator scene.
//!
//! The crate is split into a math core (evaluation, formatting, history,
//! graph sampling), a keypad interaction model, a backend-agnostic render
//! frame, and the [`Calculator`] facade that ties them together once per
//! frame.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use crate::api::{Calculator, CalculatorConfig, CalculatorMode, FrameOutcome, SceneNavigator};
pub use crate::core::{EvaluationPolicy, Evaluator, evaluate};
pub use crate::error::{CalcError, CalcResult};
