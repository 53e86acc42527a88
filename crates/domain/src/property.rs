//! Property types shared by the store and the resolution engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping of property keys to raw (unexpanded) values.
///
/// Insertion order follows the order in which a defaults source produced the
/// entries. Order carries no meaning for resolution; it only keeps listings
/// stable.
pub type PropertyMap = IndexMap<String, String>;

/// The tier a property value was found in.
///
/// Lookups consult the override layer first and fall back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySourceKind {
    /// An external override layer (process environment, system properties).
    Override,
    /// The property store holding the bundled defaults and test overrides.
    Store,
}

impl PropertySourceKind {
    /// Returns a short lowercase label for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for PropertySourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-level lookup result: the raw value of one key and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProperty {
    /// The key that was looked up.
    pub key: String,

    /// The raw value, placeholders not yet expanded.
    pub value: String,

    /// Which tier supplied the value.
    pub source: PropertySourceKind,
}

impl ResolvedProperty {
    /// Creates a new lookup result.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: PropertySourceKind) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source,
        }
    }

    /// Returns true if the value came from the override layer.
    #[must_use]
    pub fn is_override(&self) -> bool {
        self.source == PropertySourceKind::Override
    }
}
