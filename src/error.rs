use thiserror::Error;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("no chart is registered for canvas `{0}`")]
    UnknownChart(String),

    #[error("chart for canvas `{0}` is already registered")]
    DuplicateChart(String),

    #[error("expected element is missing: {0}")]
    MissingElement(String),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("host call failed: {0}")]
    Host(String),
}
