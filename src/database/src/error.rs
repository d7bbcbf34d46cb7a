use standings::LeagueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("table {id} was modified concurrently (expected revision {expected}, found {actual})")]
    Conflict { id: u32, expected: u64, actual: u64 },

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("invalid seed data: {0}")]
    Seed(String),

    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    League(#[from] LeagueError),
}

impl From<StoreError> for LeagueError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => LeagueError::NotFound(format!("{} not found!", what)),
            err @ (StoreError::Conflict { .. } | StoreError::Duplicate(_)) => {
                LeagueError::Conflict(err.to_string())
            }
            StoreError::League(inner) => inner,
            other => LeagueError::Validation(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
