mod calculator;
mod calculator_config;
mod glyph_dispatch;
mod input_controller;
mod json_contract;
mod mode;
mod render_frame_builder;
mod scene;
mod snapshot;
mod validation;

pub use calculator::Calculator;
pub use calculator_config::{CalculatorConfig, DEFAULT_HISTORY_PREVIEW, DEFAULT_PLOT_AREA};
pub use glyph_dispatch::ERROR_DISPLAY;
pub use json_contract::{RENDER_SNAPSHOT_JSON_SCHEMA_V1, RenderSnapshotJsonContractV1};
pub use mode::CalculatorMode;
pub use scene::{FrameOutcome, SceneNavigator};
pub use snapshot::{GraphSnapshot, KeypadSnapshot, RenderSnapshot};
