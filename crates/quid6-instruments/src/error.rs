use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    /// Cardinality violation: the response did not have one value per item.
    #[error("expected exactly {expected} scores, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    #[error("score {value} for item {item} is outside range [{min}, {max}]")]
    OutOfRange {
        item: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid score code: {0:?}")]
    InvalidScoreCode(String),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
