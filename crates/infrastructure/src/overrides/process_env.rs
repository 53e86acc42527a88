//! Process environment override layer.

use endpoints_application::OverrideLayer;

/// Reads overrides from the process environment.
///
/// Without a prefix a key is looked up verbatim, so `com.cloudbees.Domain`
/// reads the variable of exactly that name. With a prefix the key is
/// normalised first: `com.cloudbees.Domain` under prefix `ENDPOINTS_` reads
/// `ENDPOINTS_COM_CLOUDBEES_DOMAIN`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    prefix: Option<String>,
}

impl ProcessEnvironment {
    /// Looks keys up verbatim.
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: None }
    }

    /// Looks keys up as `prefix` followed by the normalised key.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the environment variable name consulted for `key`.
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{}", normalize(key)),
            None => key.to_string(),
        }
    }
}

impl OverrideLayer for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        let name = self.variable_name(key);
        // Names the OS cannot represent are never set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var(&name).ok()
    }
}

/// Upper-cases ASCII letters and turns every non-alphanumeric byte into `_`.
fn normalize(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variable_name_verbatim() {
        let env = ProcessEnvironment::new();
        assert_eq!(env.variable_name("com.cloudbees.Domain"), "com.cloudbees.Domain");
    }

    #[test]
    fn test_variable_name_with_prefix() {
        let env = ProcessEnvironment::with_prefix("ENDPOINTS_");
        assert_eq!(
            env.variable_name("com.cloudbees.Domain"),
            "ENDPOINTS_COM_CLOUDBEES_DOMAIN"
        );
        assert_eq!(env.variable_name("run-api"), "ENDPOINTS_RUN_API");
    }

    #[test]
    fn test_unrepresentable_names_are_absent() {
        let env = ProcessEnvironment::new();
        assert_eq!(env.get(""), None);
        assert_eq!(env.get("a=b"), None);
        assert_eq!(env.get("nul\0"), None);
    }

    #[test]
    fn test_reads_existing_variable() {
        // PATH is set in every test environment this suite runs in.
        let env = ProcessEnvironment::new();
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok());
    }

    #[test]
    fn test_unset_variable_is_absent() {
        let env = ProcessEnvironment::with_prefix("ENDPOINTS_TEST_UNSET_");
        assert_eq!(env.get("never.defined.anywhere"), None);
    }
}
