/// Common error type for the statistics operations.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
