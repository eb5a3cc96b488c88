use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("clip not found: {0}")]
    ClipNotFound(Uuid),

    #[error("track not found: {0}")]
    TrackNotFound(Uuid),

    #[error("clip {0} cannot be slipped")]
    SlipIneligible(Uuid),

    #[error("an edit session is already active")]
    EditInProgress,
}

pub type Result<T> = std::result::Result<T, CoreError>;
