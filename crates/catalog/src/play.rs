use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stagebill_core::{PlayId, StatementError, StatementResult};

/// Recognized play genre.
///
/// This is the single extensibility point for new play types: adding a
/// variant here forces every pricing `match` to handle it, so new genres
/// cannot be introduced without a pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Genre {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(StatementError::unsupported_genre(other)),
        }
    }
}

/// A play as listed in the catalog.
///
/// The genre is kept as the raw string the loader supplied: catalogs arrive
/// unvalidated, and an unrecognized genre must survive until pricing so the
/// aggregation can report it as [`StatementError::UnsupportedGenre`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    pub genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Parse the stored genre string into a recognized [`Genre`].
    pub fn genre(&self) -> StatementResult<Genre> {
        self.genre.parse()
    }
}

impl stagebill_core::ValueObject for Play {}

/// Mapping from play identifier to play.
///
/// Read-only from the core's point of view: it is fully loaded before the
/// first statement computation and only ever consulted via [`Catalog::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(HashMap<PlayId, Play>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) {
        self.0.insert(id.into(), play);
    }

    /// Resolve a play identifier to its play.
    ///
    /// Fails with [`StatementError::UnknownPlay`] carrying the missing
    /// identifier. Pure lookup, no side effects.
    pub fn resolve(&self, id: &PlayId) -> StatementResult<&Play> {
        self.0
            .get(id)
            .ok_or_else(|| StatementError::UnknownPlay(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<PlayId, Play>> for Catalog {
    fn from(plays: HashMap<PlayId, Play>) -> Self {
        Self(plays)
    }
}

impl<I: Into<PlayId>> FromIterator<(I, Play)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (I, Play)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, play)| (id.into(), play)).collect())
    }
}
