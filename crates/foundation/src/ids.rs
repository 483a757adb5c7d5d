use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque feature identifier as reported by the map's rendered feature set.
///
/// Ordering is lexical so maps keyed by `FeatureId` iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        FeatureId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId::new(s)
    }
}

impl From<String> for FeatureId {
    fn from(s: String) -> Self {
        FeatureId(s)
    }
}
