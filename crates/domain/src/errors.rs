use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid mirror instruction: {0}")]
    InvalidInstruction(String),

    #[error("Unknown host: {0}")]
    UnknownHost(String),

    #[error("Resolution denied for host: {0}")]
    ResolutionDenied(String),

    #[error("Resolution error: {0}")]
    ResolutionError(String),

    #[error("Reachability probe failed: {0}")]
    ProbeFailed(String),

    #[error("Task failed: {0}")]
    TaskFailed(String),
}
