use thiserror::Error;

pub type ActivationResult<T> = Result<T, ActivationError>;

/// Why an activation attempt did not succeed.
///
/// Callers collapse both variants into the same user-facing failure; the
/// distinction only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    #[error("activation rejected with status {status}")]
    Rejected { status: u16 },

    #[error("activation request did not complete: {0}")]
    Transport(String),
}

impl ActivationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ActivationError::Rejected { status } => Some(*status),
            ActivationError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for ActivationError {
    fn from(err: reqwest::Error) -> Self {
        ActivationError::Transport(err.to_string())
    }
}
