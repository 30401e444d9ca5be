pub mod evaluator;
pub mod expr;
pub mod functions;
pub mod graph;
pub mod history;
pub mod input_buffer;
pub mod lexer;
pub mod number_format;
pub mod parser;
pub mod scale;
pub mod text_split;
pub mod types;

pub use evaluator::{
    ErrorPolicy, EvaluationPolicy, Evaluator, Grammar, PreparedExpression, evaluate,
};
pub use expr::{BinaryOp, Expr};
pub use functions::{MathFunction, factorial};
pub use graph::{GraphConfig, GraphSampleSet, GraphSampler, PlotSource};
pub use history::{HistoryEntry, HistoryLog, HistoryOverflow};
pub use input_buffer::InputBuffer;
pub use number_format::{format_display, format_significant};
pub use parser::parse_expression;
pub use scale::LinearScale;
pub use types::{Rect, Viewport};
