use thiserror::Error;

/// Every failure a request can end in.
///
/// The display form of each variant is the bare message; it is what callers
/// see in the response body.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MissingAvailability(String),

    #[error("{0}")]
    Store(#[from] eyre::Report),

    #[error("{0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScheduleError {
    /// Whether the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScheduleError::Validation(_))
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
