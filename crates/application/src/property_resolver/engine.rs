//! Property resolution engine
//!
//! Resolves a key to its fully expanded value, substituting `${key}`
//! placeholders from the override layer and the property store.

use endpoints_domain::{PropertySourceKind, ResolvedProperty};

use super::parser::{Segment, extract_placeholder_keys, next_segment};
use crate::ports::{NoOverrides, OverrideLayer};
use crate::property_store::PropertyStore;

/// Default upper bound on placeholder expansions per resolution.
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 1024;

/// Result of resolving one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The key that was resolved.
    pub key: String,

    /// The expanded value.
    pub resolved: String,

    /// Which tier supplied the raw value of `key`.
    pub source: PropertySourceKind,

    /// Placeholder values that were substituted, in expansion order.
    pub substitutions: Vec<ResolvedProperty>,

    /// Placeholder keys left as literal `${key}` text.
    pub unresolved: Vec<String>,

    /// Whether an unterminated `${` was copied through verbatim.
    pub unterminated: bool,

    /// Whether the substitution budget ran out.
    pub budget_exhausted: bool,
}

impl ResolutionResult {
    /// Returns true if every placeholder was expanded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && !self.unterminated
    }

    /// Returns the count of substituted placeholders.
    #[must_use]
    pub fn substitution_count(&self) -> usize {
        self.substitutions.len()
    }
}

/// The property resolution engine.
///
/// Owns the [`PropertyStore`] and consults the override layer `O` before it
/// for every key. Nothing is cached: each call sees the current state of
/// both tiers.
#[derive(Debug)]
pub struct PropertyResolver<O = NoOverrides> {
    store: PropertyStore,
    overrides: O,
    max_substitutions: usize,
}

impl PropertyResolver<NoOverrides> {
    /// Creates a resolver with no override layer.
    #[must_use]
    pub fn without_overrides(store: PropertyStore) -> Self {
        Self::new(store, NoOverrides)
    }
}

impl<O: OverrideLayer> PropertyResolver<O> {
    /// Creates a resolver over `store` with `overrides` taking precedence.
    #[must_use]
    pub const fn new(store: PropertyStore, overrides: O) -> Self {
        Self {
            store,
            overrides,
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
        }
    }

    /// Sets the maximum number of placeholder expansions per resolution.
    #[must_use]
    pub const fn with_max_substitutions(mut self, max: usize) -> Self {
        self.max_substitutions = max;
        self
    }

    /// Returns the maximum number of placeholder expansions per resolution.
    #[must_use]
    pub const fn max_substitutions(&self) -> usize {
        self.max_substitutions
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Returns the override layer.
    #[must_use]
    pub const fn overrides(&self) -> &O {
        &self.overrides
    }

    /// Looks up the raw value of `key`: override layer first, then the store.
    ///
    /// Placeholders in the returned value are not expanded.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ResolvedProperty> {
        if let Some(value) = self.overrides.get(key) {
            return Some(ResolvedProperty::new(key, value, PropertySourceKind::Override));
        }
        self.store
            .get(key)
            .map(|value| ResolvedProperty::new(key, value, PropertySourceKind::Store))
    }

    /// Resolves `key` to its expanded value, or `None` if it is not defined.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.resolve_detailed(key).map(|r| r.resolved)
    }

    /// Resolves `key`, falling back to `default` when it is not defined.
    #[must_use]
    pub fn resolve_or_default(&self, key: &str, default: &str) -> String {
        self.resolve(key).unwrap_or_else(|| default.to_string())
    }

    /// Resolves `key` and reports what was substituted along the way.
    ///
    /// The value is scanned left to right. Each `${inner}` is looked up one
    /// level deep; the found value is spliced in front of the remaining text
    /// and scanning continues over it, so nested placeholders expand without
    /// recursion. A placeholder stays literal when `inner` is undefined, when
    /// `inner` is `key` itself, when its value is the text of `key`, or once
    /// the substitution budget is spent. An unterminated `${` ends the scan
    /// and is copied through with the rest of the value.
    #[must_use]
    pub fn resolve_detailed(&self, key: &str) -> Option<ResolutionResult> {
        let outer = self.lookup(key)?;

        let mut result = String::with_capacity(outer.value.len());
        let mut substitutions = Vec::new();
        let mut unresolved = Vec::new();
        let mut unterminated = false;
        let mut budget_exhausted = false;
        let mut remaining = self.max_substitutions;
        let mut working = outer.value;

        loop {
            let next = match next_segment(&working) {
                Segment::Text(text) => {
                    result.push_str(text);
                    None
                }
                Segment::Unterminated { prefix, rest } => {
                    result.push_str(prefix);
                    result.push_str(rest);
                    unterminated = true;
                    None
                }
                Segment::Placeholder {
                    prefix,
                    key: inner_key,
                    suffix,
                } => {
                    result.push_str(prefix);

                    let inner = self
                        .lookup(inner_key)
                        .filter(|inner| inner_key != key && inner.value != key);

                    match inner {
                        Some(inner) if remaining > 0 => {
                            remaining -= 1;
                            tracing::trace!(key, placeholder = inner_key, source = %inner.source, "substituted");
                            let spliced = format!("{}{suffix}", inner.value);
                            substitutions.push(inner);
                            Some(spliced)
                        }
                        Some(_) => {
                            if !budget_exhausted {
                                tracing::warn!(
                                    key,
                                    placeholder = inner_key,
                                    max_substitutions = self.max_substitutions,
                                    "substitution budget exhausted, leaving placeholders unexpanded"
                                );
                                budget_exhausted = true;
                            }
                            push_literal(&mut result, inner_key);
                            unresolved.push(inner_key.to_string());
                            Some(suffix.to_string())
                        }
                        None => {
                            push_literal(&mut result, inner_key);
                            unresolved.push(inner_key.to_string());
                            Some(suffix.to_string())
                        }
                    }
                }
            };

            match next {
                Some(next) => working = next,
                None => break,
            }
        }

        tracing::debug!(
            key,
            source = %outer.source,
            substitutions = substitutions.len(),
            unresolved = unresolved.len(),
            "property resolved"
        );

        Some(ResolutionResult {
            key: key.to_string(),
            resolved: result,
            source: outer.source,
            substitutions,
            unresolved,
            unterminated,
            budget_exhausted,
        })
    }

    /// Returns the placeholder keys that stay literal when resolving `key`.
    #[must_use]
    pub fn find_unresolved(&self, key: &str) -> Vec<String> {
        self.resolve_detailed(key)
            .map(|r| r.unresolved)
            .unwrap_or_default()
    }

    /// Returns the placeholder keys written directly in the raw value of `key`.
    #[must_use]
    pub fn references(&self, key: &str) -> Vec<String> {
        self.lookup(key)
            .map(|p| extract_placeholder_keys(&p.value))
            .unwrap_or_default()
    }

    /// Test hook: restores the store to its defaults, dropping all overrides.
    pub fn reset(&self) {
        self.store.reset();
    }

    /// Test hook: overrides a single store entry until the next [`reset`](Self::reset).
    pub fn override_property(&self, key: impl Into<String>, value: impl Into<String>) {
        self.store.override_property(key, value);
    }
}

fn push_literal(result: &mut String, key: &str) {
    result.push_str("${");
    result.push_str(key);
    result.push('}');
}
