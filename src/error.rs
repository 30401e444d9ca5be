use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed expression `{input}`: {reason}")]
    MalformedExpression { input: String, reason: String },

    #[error("domain error: {function}({argument}) is undefined")]
    DomainError { function: &'static str, argument: f64 },

    #[error("input buffer full (capacity {capacity})")]
    BufferFull { capacity: usize },

    #[error("invalid viewport: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl CalcError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
