use thiserror::Error;

/// Failures of league operations. Every variant aborts the operation
/// before the league is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Timeout(String),
}

impl LeagueError {
    pub fn not_found(message: impl Into<String>) -> Self {
        LeagueError::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        LeagueError::Unauthorized(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        LeagueError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        LeagueError::Conflict(message.into())
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;
