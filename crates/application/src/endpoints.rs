//! Endpoint accessors
//!
//! Thin, stateless views over a [`PropertyResolver`] returning the
//! well-known service URLs.

use endpoints_domain::{DomainKey, EndpointKey, format_template, remove_end};

use crate::ports::OverrideLayer;
use crate::property_resolver::PropertyResolver;

/// Resolved service endpoint URLs, with a single trailing `/` trimmed.
///
/// # Example
///
/// ```
/// use endpoints_application::{EndPoints, PropertyResolver, PropertyStore};
/// use endpoints_domain::{EndpointKey, PropertyMap};
///
/// let mut defaults = PropertyMap::new();
/// defaults.insert(
///     EndpointKey::Licenses.property_key().to_string(),
///     "https://licenses.example.com/".to_string(),
/// );
///
/// let resolver = PropertyResolver::without_overrides(PropertyStore::from_properties(defaults));
/// let endpoints = EndPoints::new(&resolver);
/// assert_eq!(endpoints.licenses().as_deref(), Some("https://licenses.example.com"));
/// ```
#[derive(Debug)]
pub struct EndPoints<'a, O> {
    resolver: &'a PropertyResolver<O>,
}

impl<O> Clone for EndPoints<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for EndPoints<'_, O> {}

impl<'a, O: OverrideLayer> EndPoints<'a, O> {
    /// Creates accessors over `resolver`.
    #[must_use]
    pub const fn new(resolver: &'a PropertyResolver<O>) -> Self {
        Self { resolver }
    }

    /// Resolves `key` and trims one trailing `/`.
    #[must_use]
    pub fn get(&self, key: EndpointKey) -> Option<String> {
        self.resolver
            .resolve(key.property_key())
            .map(|value| remove_end(&value, "/").to_string())
    }

    /// The Grand Central web API.
    #[must_use]
    pub fn grand_central(&self) -> Option<String> {
        self.get(EndpointKey::GrandCentral)
    }

    /// The Grand Central REST API.
    #[must_use]
    pub fn gc_api(&self) -> Option<String> {
        self.get(EndpointKey::GcApi)
    }

    /// The application run API.
    #[must_use]
    pub fn run_api(&self) -> Option<String> {
        self.get(EndpointKey::RunApi)
    }

    /// The licensing service.
    #[must_use]
    pub fn licenses(&self) -> Option<String> {
        self.get(EndpointKey::Licenses)
    }

    /// The forge endpoint template; its `%s` takes an account name.
    #[must_use]
    pub fn forge_template(&self) -> Option<String> {
        self.get(EndpointKey::Forge)
    }

    /// The forge endpoint for `account`.
    #[must_use]
    pub fn forge(&self, account: &str) -> Option<String> {
        self.forge_template()
            .map(|template| format_template(&template, account))
    }

    /// The REST resource of one user.
    #[must_use]
    pub fn gc_api_user_uri(&self, user_id: &str) -> Option<String> {
        self.gc_api().map(|api| format!("{api}/users/{user_id}"))
    }
}

/// Resolved domain names. Unlike [`EndPoints`] these are returned untrimmed.
#[derive(Debug)]
pub struct Domain<'a, O> {
    resolver: &'a PropertyResolver<O>,
}

impl<O> Clone for Domain<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Domain<'_, O> {}

impl<'a, O: OverrideLayer> Domain<'a, O> {
    /// Creates accessors over `resolver`.
    #[must_use]
    pub const fn new(resolver: &'a PropertyResolver<O>) -> Self {
        Self { resolver }
    }

    /// Resolves a domain key.
    #[must_use]
    pub fn get(&self, key: DomainKey) -> Option<String> {
        self.resolver.resolve(key.property_key())
    }

    /// The root domain.
    #[must_use]
    pub fn root(&self) -> Option<String> {
        self.get(DomainKey::Root)
    }

    /// The Grand Central host name.
    #[must_use]
    pub fn grand_central(&self) -> Option<String> {
        self.get(DomainKey::GrandCentral)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::PropertyStore;
    use endpoints_domain::PropertyMap;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn defaults() -> PropertyMap {
        [
            (DomainKey::Root.property_key(), "cloudbees.com"),
            (DomainKey::GrandCentral.property_key(), "grandcentral.${com.cloudbees.Domain}"),
            (
                EndpointKey::GrandCentral.property_key(),
                "https://${com.cloudbees.Domain.grandCentral}/api",
            ),
            (EndpointKey::GcApi.property_key(), "https://api.${com.cloudbees.Domain}/v2/"),
            (EndpointKey::RunApi.property_key(), "https://api.${com.cloudbees.Domain}/api"),
            (EndpointKey::Forge.property_key(), "https://%s.forge.${com.cloudbees.Domain}/"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn resolver() -> PropertyResolver {
        PropertyResolver::without_overrides(PropertyStore::from_properties(defaults()))
    }

    #[test]
    fn test_grand_central() {
        let resolver = resolver();
        let endpoints = EndPoints::new(&resolver);
        assert_eq!(
            endpoints.grand_central(),
            Some("https://grandcentral.cloudbees.com/api".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_once() {
        let resolver = resolver();
        let endpoints = EndPoints::new(&resolver);
        assert_eq!(endpoints.gc_api(), Some("https://api.cloudbees.com/v2".to_string()));

        resolver.override_property(EndpointKey::RunApi.property_key(), "https://x.example.com//");
        assert_eq!(endpoints.run_api(), Some("https://x.example.com/".to_string()));
    }

    #[test]
    fn test_missing_endpoint_is_absent() {
        let resolver = resolver();
        let endpoints = EndPoints::new(&resolver);
        assert_eq!(endpoints.licenses(), None);
        assert!(endpoints.forge("acme").is_some());
    }

    #[test]
    fn test_empty_endpoint_passes_through() {
        let resolver = resolver();
        resolver.override_property(EndpointKey::Licenses.property_key(), "");
        assert_eq!(EndPoints::new(&resolver).licenses(), Some(String::new()));
    }

    #[test]
    fn test_forge_formats_account() {
        let resolver = resolver();
        let endpoints = EndPoints::new(&resolver);
        assert_eq!(
            endpoints.forge_template(),
            Some("https://%s.forge.cloudbees.com".to_string())
        );
        assert_eq!(
            endpoints.forge("acme"),
            Some("https://acme.forge.cloudbees.com".to_string())
        );
    }

    #[test]
    fn test_gc_api_user_uri() {
        let resolver = resolver();
        assert_eq!(
            EndPoints::new(&resolver).gc_api_user_uri("bob"),
            Some("https://api.cloudbees.com/v2/users/bob".to_string())
        );
    }

    #[test]
    fn test_domain_accessors_are_untrimmed() {
        let resolver = resolver();
        resolver.override_property(DomainKey::Root.property_key(), "example.com/");
        let domain = Domain::new(&resolver);
        assert_eq!(domain.root(), Some("example.com/".to_string()));
        assert_eq!(domain.grand_central(), Some("grandcentral.example.com/".to_string()));
    }

    #[test]
    fn test_root_override_layer_redirects_every_endpoint() {
        let overrides = HashMap::from([(
            DomainKey::Root.property_key().to_string(),
            "beescloud.com".to_string(),
        )]);
        let resolver = PropertyResolver::new(PropertyStore::from_properties(defaults()), overrides);
        let endpoints = EndPoints::new(&resolver);

        assert_eq!(
            endpoints.grand_central(),
            Some("https://grandcentral.beescloud.com/api".to_string())
        );
        assert_eq!(endpoints.gc_api(), Some("https://api.beescloud.com/v2".to_string()));
        assert_eq!(
            endpoints.forge("acme"),
            Some("https://acme.forge.beescloud.com".to_string())
        );
        assert_eq!(Domain::new(&resolver).root(), Some("beescloud.com".to_string()));
    }
}
