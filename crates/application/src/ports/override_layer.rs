//! Override layer port
//!
//! An override layer is consulted before the property store for every key,
//! including keys named inside `${...}` placeholders.

use std::collections::HashMap;
use std::sync::Arc;

use endpoints_domain::PropertyMap;

/// A read-only, higher-precedence key/value lookup.
pub trait OverrideLayer: Send + Sync {
    /// Returns the override for `key`, if one is defined.
    fn get(&self, key: &str) -> Option<String>;
}

/// An override layer that never defines anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideLayer for NoOverrides {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

impl OverrideLayer for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl OverrideLayer for PropertyMap {
    fn get(&self, key: &str) -> Option<String> {
        indexmap::IndexMap::get(self, key).cloned()
    }
}

impl<T: OverrideLayer + ?Sized> OverrideLayer for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: OverrideLayer + ?Sized> OverrideLayer for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Two override layers stacked; the first one that defines a key wins.
#[derive(Debug, Clone, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: OverrideLayer, B: OverrideLayer> Chain<A, B> {
    /// Stacks `first` above `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: OverrideLayer, B: OverrideLayer> OverrideLayer for Chain<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.first.get(key).or_else(|| self.second.get(key))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_no_overrides() {
        assert_eq!(NoOverrides.get("anything"), None);
    }

    #[test]
    fn test_hash_map_layer() {
        let layer = map(&[("root", "beescloud.com")]);
        assert_eq!(OverrideLayer::get(&layer, "root"), Some("beescloud.com".to_string()));
        assert_eq!(OverrideLayer::get(&layer, "other"), None);
    }

    #[test]
    fn test_chain_first_wins() {
        let chain = Chain::new(map(&[("a", "first")]), map(&[("a", "second"), ("b", "only")]));
        assert_eq!(chain.get("a"), Some("first".to_string()));
        assert_eq!(chain.get("b"), Some("only".to_string()));
        assert_eq!(chain.get("c"), None);
    }

    #[test]
    fn test_boxed_and_shared_layers() {
        let boxed: Box<dyn OverrideLayer> = Box::new(map(&[("k", "v")]));
        assert_eq!(boxed.get("k"), Some("v".to_string()));

        let shared: Arc<dyn OverrideLayer> = Arc::new(map(&[("k", "w")]));
        assert_eq!(shared.get("k"), Some("w".to_string()));
    }
}
