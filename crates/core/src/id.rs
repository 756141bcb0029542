//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a play (catalog key).
///
/// Play identifiers are short external slugs such as `"hamlet"` or
/// `"as-like"`. They are opaque to the core: a performance may carry any
/// string here, and the reference is only validated when the catalog is
/// consulted during statement aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PlayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(PlayId::new("hamlet"), PlayId::from("hamlet"));
        assert_ne!(PlayId::new("hamlet"), PlayId::new("othello"));
    }

    #[test]
    fn displays_as_the_raw_slug() {
        assert_eq!(PlayId::new("as-like").to_string(), "as-like");
    }
}
