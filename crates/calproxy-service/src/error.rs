use calproxy_rfc::{DurationError, ParseError};
use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("calendar not found")]
    CalendarNotFound,

    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("upstream returned invalid content type {0:?}")]
    UpstreamContentType(String),

    #[error("error parsing calendar: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Duration(#[from] DurationError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
