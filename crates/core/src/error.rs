//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing domain.
pub type StatementResult<T> = Result<T, StatementError>;

/// Statement computation error.
///
/// Both variants are fatal to the current aggregation call: the scan stops at
/// the first failing performance and no partial statement is produced.
/// Renderers and other callers surface the message verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play identifier absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// A resolved play carries a genre outside the recognized set.
    #[error("unsupported genre: {0}")]
    UnsupportedGenre(String),
}

impl StatementError {
    pub fn unknown_play(id: impl Into<PlayId>) -> Self {
        Self::UnknownPlay(id.into())
    }

    pub fn unsupported_genre(genre: impl Into<String>) -> Self {
        Self::UnsupportedGenre(genre.into())
    }
}
