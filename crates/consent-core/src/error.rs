use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("too many surgeons: {count} listed, at most {max} allowed")]
    TooManySurgeons { count: usize, max: usize },

    #[error("risk figure '{field}' is not a probability: {value}")]
    InvalidRisk { field: &'static str, value: f64 },
}
