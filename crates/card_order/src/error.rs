use thiserror::Error;

use crate::key::CardKey;

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("card keys must be unique: {key} repeated at position {index}")]
    DuplicateKey { key: CardKey, index: usize },

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("invalid organizer input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no card with key {0}")]
    UnknownCard(CardKey),

    #[error("no card in slot {0}")]
    UnknownSlot(usize),
}

pub type Result<T, E = OrganizerError> = std::result::Result<T, E>;
