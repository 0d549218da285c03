//! Typed ID wrappers for type safety across mediaaccess.
//!
//! Entity ids are plain strings owned by their backend, but the small integer
//! that addresses a backend gets its own newtype so it can never be confused
//! with an offset, a count, or a range bound.

use serde::{Deserialize, Serialize};

/// Identifier of one registered backend within a capability kind.
///
/// The same number may be used by an unrelated backend of another kind:
/// movie provider `2` and music provider `2` have nothing in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(u32);

impl ProviderId {
    /// Wrap a raw provider number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw provider number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProviderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProviderId> for u32 {
    fn from(id: ProviderId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProviderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
