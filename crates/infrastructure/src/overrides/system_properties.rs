//! In-process system properties override layer.

use std::collections::HashMap;
use std::sync::Arc;

use endpoints_application::OverrideLayer;
use parking_lot::RwLock;

/// A process-local, settable key/value table used as an override layer.
///
/// Clones share the same table, so a handle kept by a test harness can
/// change what an already built resolver sees.
#[derive(Debug, Clone, Default)]
pub struct SystemProperties {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl SystemProperties {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value.
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.write().insert(key.into(), value.into())
    }

    /// Removes a property, returning its value.
    pub fn clear_property(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    /// Returns a property value.
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Removes every property.
    pub fn clear(&self) {
        self.values.write().clear();
    }

    /// Returns the number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Returns true if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SystemProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

impl OverrideLayer for SystemProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.get_property(key)
    }
}
