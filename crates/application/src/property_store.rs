//! Property store
//!
//! Holds the default property values loaded from a [`DefaultsSource`] plus
//! any test overrides applied on top of them.

use std::fmt;

use endpoints_domain::PropertyMap;
use parking_lot::RwLock;

use crate::ports::{DefaultsError, DefaultsSource};

/// Mutable key/value store seeded from a defaults source.
///
/// The store is created by loading its defaults once. Afterwards it only
/// changes through [`reset`](Self::reset) and
/// [`override_property`](Self::override_property), both meant for test
/// harnesses. Each read and write takes the internal lock on its own, so a
/// resolution running concurrently with a reset may observe either the old
/// or the new contents.
pub struct PropertyStore {
    values: RwLock<PropertyMap>,
    defaults: Box<dyn DefaultsSource>,
}

impl PropertyStore {
    /// Creates a store and loads it from `defaults`.
    pub fn new(defaults: impl DefaultsSource + 'static) -> Self {
        Self::from_boxed(Box::new(defaults))
    }

    /// Creates a store from an already boxed defaults source.
    #[must_use]
    pub fn from_boxed(defaults: Box<dyn DefaultsSource>) -> Self {
        let values = load_from(defaults.as_ref());
        Self {
            values: RwLock::new(values),
            defaults,
        }
    }

    /// Creates a store from a fixed set of properties.
    #[must_use]
    pub fn from_properties(properties: PropertyMap) -> Self {
        Self::new(properties)
    }

    /// Reads the defaults source afresh.
    ///
    /// Never fails: if the source is missing the result is empty, and if it
    /// breaks part-way the entries parsed so far are returned.
    #[must_use]
    pub fn load(&self) -> PropertyMap {
        load_from(self.defaults.as_ref())
    }

    /// Discards every entry, including overrides, and reloads the defaults.
    pub fn reset(&self) {
        let fresh = self.load();
        let mut values = self.values.write();
        values.clear();
        values.extend(fresh);
        tracing::info!(source = self.defaults.name(), entries = values.len(), "property store reset");
    }

    /// Sets or replaces a single entry until the next [`reset`](Self::reset).
    pub fn override_property(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        tracing::debug!(key = %key, "property overridden");
        self.values.write().insert(key, value.into());
    }

    /// Returns the current value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Returns every key in load order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    /// Returns a copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> PropertyMap {
        self.values.read().clone()
    }

    /// Returns the name of the defaults source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.defaults.name()
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("source", &self.defaults.name())
            .field("entries", &self.len())
            .finish()
    }
}

fn load_from(source: &dyn DefaultsSource) -> PropertyMap {
    let mut properties = PropertyMap::new();
    match source.read_into(&mut properties) {
        Ok(()) => {
            tracing::debug!(source = source.name(), entries = properties.len(), "defaults loaded");
        }
        Err(DefaultsError::NotFound(what)) => {
            tracing::debug!(source = source.name(), missing = %what, "defaults source not found");
        }
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                entries = properties.len(),
                error = %e,
                "defaults source only partially loaded"
            );
        }
    }
    properties
}
