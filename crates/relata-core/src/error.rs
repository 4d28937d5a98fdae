use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid report type: {0}")]
    InvalidReportType(String),

    #[error("age out of range: {0}")]
    AgeOutOfRange(u8),

    #[error("missing required field: {0}")]
    MissingField(String),
}
