//! Error types for the agenda engine.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("The {0} field must not be empty")]
    EmptyField(String),

    #[error("Invalid date '{0}'. Expected yyyy-mm-dd")]
    InvalidFormat(String),

    #[error("The start time must not be after the end time")]
    InvalidInterval,

    #[error("A meeting titled '{0}' already exists")]
    TitleConflict(String),

    #[error("Meeting not found: {0}")]
    NotFound(String),

    #[error("Only the sponsor may change or delete a meeting")]
    NotAuthorized,

    #[error("You are not a participator of this meeting")]
    NotParticipant,

    #[error("The sponsor cannot quit a meeting; delete it instead")]
    SponsorCannotQuit,

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
