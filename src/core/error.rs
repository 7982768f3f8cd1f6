use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown unit in exchange: {0:?}")]
    UnknownUnit(crate::core::types::UnitId),

    #[error("Invalid participant: {0}")]
    InvalidParticipant(String),

    #[error("Turn sequencer produced no slots")]
    EmptyTurnSequence,

    #[error("Special '{0}' defines a trigger for this role but no hook is bound")]
    MissingSpecialHooks(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
