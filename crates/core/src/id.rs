//! Unique identifiers for tanktrack entities.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tank, stable for the tank's lifetime.
///
/// Ids come from the seed data (e.g. `N00-WT-01`); they are never
/// generated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TankId(String);

impl TankId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TankId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TankId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
