//! Resolver configuration
//!
//! Reads the handful of settings that decide where defaults come from and
//! which environment variables may override them.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use endpoints_application::{
    ApplicationError, ApplicationResult, Chain, DEFAULT_MAX_SUBSTITUTIONS, DefaultsSource,
    PropertyResolver, PropertyStore,
};

use crate::defaults::{BundledDefaults, PropertiesFile};
use crate::overrides::{ProcessEnvironment, SystemProperties};

/// Path of a `.properties` file replacing the bundled defaults.
pub const DEFAULTS_FILE_VAR: &str = "ENDPOINTS_DEFAULTS_FILE";

/// Prefix enabling normalised environment overrides.
pub const ENV_PREFIX_VAR: &str = "ENDPOINTS_ENV_PREFIX";

/// Upper bound on placeholder expansions per resolution.
pub const MAX_SUBSTITUTIONS_VAR: &str = "ENDPOINTS_MAX_SUBSTITUTIONS";

/// A resolver whose overrides are system properties, then the process environment.
pub type EndpointResolver = PropertyResolver<Chain<SystemProperties, ProcessEnvironment>>;

/// Settings for building an [`EndpointResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Defaults file to use instead of the bundled resource.
    pub defaults_file: Option<PathBuf>,

    /// Environment variable prefix; `None` means keys are looked up verbatim.
    pub env_prefix: Option<String>,

    /// Upper bound on placeholder expansions per resolution.
    pub max_substitutions: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            defaults_file: None,
            env_prefix: None,
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
        }
    }
}

impl ResolverConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ApplicationError::Config` if a variable holds an invalid value.
    pub fn from_env() -> ApplicationResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps variable names to values.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// Returns `ApplicationError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApplicationResult<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_substitutions = match var(MAX_SUBSTITUTIONS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| {
                    ApplicationError::Config(format!(
                        "{MAX_SUBSTITUTIONS_VAR} must be a positive integer, got {raw:?}"
                    ))
                })?
                .get(),
            None => DEFAULT_MAX_SUBSTITUTIONS,
        };

        Ok(Self {
            defaults_file: var(DEFAULTS_FILE_VAR).map(PathBuf::from),
            env_prefix: var(ENV_PREFIX_VAR),
            max_substitutions,
        })
    }

    /// Returns the configured defaults source.
    ///
    /// # Errors
    /// Returns `ApplicationError::Defaults` if a defaults file is configured
    /// but does not exist.
    pub fn defaults_source(&self) -> ApplicationResult<Box<dyn DefaultsSource>> {
        match &self.defaults_file {
            Some(path) => {
                let file = PropertiesFile::new(path);
                file.check()?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(BundledDefaults)),
        }
    }

    /// Returns the configured process environment layer.
    #[must_use]
    pub fn process_environment(&self) -> ProcessEnvironment {
        self.env_prefix
            .as_ref()
            .map_or_else(ProcessEnvironment::new, ProcessEnvironment::with_prefix)
    }

    /// Builds a resolver with a fresh, empty system properties table.
    ///
    /// # Errors
    /// See [`defaults_source`](Self::defaults_source).
    pub fn build(&self) -> ApplicationResult<EndpointResolver> {
        self.build_with(SystemProperties::new())
    }

    /// Builds a resolver sharing `system` as its highest-precedence layer.
    ///
    /// # Errors
    /// See [`defaults_source`](Self::defaults_source).
    pub fn build_with(&self, system: SystemProperties) -> ApplicationResult<EndpointResolver> {
        let store = PropertyStore::from_boxed(self.defaults_source()?);
        tracing::debug!(
            source = store.source_name(),
            entries = store.len(),
            env_prefix = self.env_prefix.as_deref().unwrap_or(""),
            max_substitutions = self.max_substitutions,
            "endpoint resolver configured"
        );
        let overrides = Chain::new(system, self.process_environment());
        Ok(PropertyResolver::new(store, overrides).with_max_substitutions(self.max_substitutions))
    }
}

/// Builds a resolver over the bundled defaults with `system` and the
/// unprefixed process environment as override layers.
#[must_use]
pub fn default_resolver(system: SystemProperties) -> EndpointResolver {
    let overrides = Chain::new(system, ProcessEnvironment::new());
    PropertyResolver::new(PropertyStore::new(BundledDefaults), overrides)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use endpoints_application::DefaultsError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ResolverConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ResolverConfig::from_lookup(lookup(&[
            (DEFAULTS_FILE_VAR, "/etc/endpoints.properties"),
            (ENV_PREFIX_VAR, "ENDPOINTS_"),
            (MAX_SUBSTITUTIONS_VAR, " 16 "),
        ]))
        .unwrap();

        assert_eq!(config.defaults_file, Some(PathBuf::from("/etc/endpoints.properties")));
        assert_eq!(config.env_prefix.as_deref(), Some("ENDPOINTS_"));
        assert_eq!(config.max_substitutions, 16);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config =
            ResolverConfig::from_lookup(lookup(&[(DEFAULTS_FILE_VAR, ""), (ENV_PREFIX_VAR, "  ")]))
                .unwrap();
        assert_eq!(config.defaults_file, None);
        assert_eq!(config.env_prefix, None);
    }

    #[test]
    fn test_invalid_max_substitutions() {
        let err = ResolverConfig::from_lookup(lookup(&[(MAX_SUBSTITUTIONS_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Config(_)));
        assert!(err.to_string().contains(MAX_SUBSTITUTIONS_VAR));
    }

    #[test]
    fn test_zero_max_substitutions_is_rejected() {
        let err = ResolverConfig::from_lookup(lookup(&[(MAX_SUBSTITUTIONS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Config(_)));
        assert!(err.to_string().contains("positive integer"));

        let err = ResolverConfig::from_lookup(lookup(&[(MAX_SUBSTITUTIONS_VAR, "-3")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Config(_)));
    }

    #[test]
    fn test_missing_defaults_file_is_an_error() {
        let config = ResolverConfig {
            defaults_file: Some(PathBuf::from("/definitely/not/here.properties")),
            ..ResolverConfig::default()
        };
        let err = config.build().unwrap_err();
        assert!(matches!(err, ApplicationError::Defaults(DefaultsError::NotFound(_))));
    }

    #[test]
    fn test_build_from_defaults_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "root=example.org").unwrap();
        writeln!(file, "site=https://www.${{root}}/").unwrap();

        let config = ResolverConfig {
            defaults_file: Some(file.path().to_path_buf()),
            max_substitutions: 8,
            ..ResolverConfig::default()
        };
        let resolver = config.build().unwrap();

        assert_eq!(resolver.resolve("site"), Some("https://www.example.org/".to_string()));
        assert_eq!(resolver.max_substitutions(), 8);
    }

    #[test]
    fn test_build_with_shared_system_properties() {
        let system = SystemProperties::new();
        let resolver = ResolverConfig::default().build_with(system.clone()).unwrap();

        system.set_property("com.cloudbees.Domain", "beescloud.com");
        assert_eq!(
            resolver.resolve("com.cloudbees.EndPoints.grandCentral"),
            Some("https://grandcentral.beescloud.com/api".to_string())
        );
    }

    #[test]
    fn test_process_environment_prefix() {
        let config = ResolverConfig {
            env_prefix: Some("ENDPOINTS_".to_string()),
            ..ResolverConfig::default()
        };
        assert_eq!(
            config.process_environment().variable_name("com.cloudbees.Domain"),
            "ENDPOINTS_COM_CLOUDBEES_DOMAIN"
        );
    }
}
