//! Command-line arguments.

use std::str::FromStr;

use clap::Parser;
use endpoints_domain::{DomainError, DomainKey, EndpointKey};

/// One property the user asked to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A service endpoint.
    Endpoint(EndpointKey),
    /// A domain name.
    Domain(DomainKey),
}

impl Selection {
    /// Every endpoint followed by every domain name.
    pub fn all() -> Vec<Self> {
        EndpointKey::ALL
            .into_iter()
            .map(Self::Endpoint)
            .chain(DomainKey::ALL.into_iter().map(Self::Domain))
            .collect()
    }
}

impl FromStr for Selection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<EndpointKey>()
            .map(Self::Endpoint)
            .or_else(|_| s.parse::<DomainKey>().map(Self::Domain))
    }
}

const ENVIRONMENT_HELP: &str = "\
Environment:
  ENDPOINTS_DEFAULTS_FILE       .properties file replacing the bundled defaults
  ENDPOINTS_ENV_PREFIX          prefix for normalised environment overrides
  ENDPOINTS_MAX_SUBSTITUTIONS   upper bound on placeholder expansions
  RUST_LOG                      log filter (default: warn)";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "endpoints", version)]
#[command(about = "Prints the resolved service endpoints", long_about = None)]
#[command(after_help = ENVIRONMENT_HELP)]
pub struct Args {
    /// Print JSON instead of `name = value` lines
    #[arg(long)]
    pub json: bool,

    /// Include where each value came from, the placeholders it references
    /// and the ones that stayed unresolved
    #[arg(long)]
    pub explain: bool,

    /// Account substituted into template endpoints (forge)
    #[arg(long, value_name = "NAME")]
    pub account: Option<String>,

    /// Endpoints or domain names to print; all of them when omitted
    #[arg(value_name = "ENDPOINT")]
    pub selections: Vec<Selection>,
}

impl Args {
    /// The properties to print, in order.
    pub fn selected(&self) -> Vec<Selection> {
        if self.selections.is_empty() {
            Selection::all()
        } else {
            self.selections.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_selects_everything() {
        let args = Args::try_parse_from(["endpoints"]).unwrap();
        assert!(!args.json);
        assert!(args.selections.is_empty());
        assert_eq!(args.selected(), Selection::all());
        assert_eq!(args.selected().len(), 7);
    }

    #[test]
    fn test_flags_and_names() {
        let args = Args::try_parse_from([
            "endpoints",
            "--json",
            "grandCentral",
            "--account",
            "acme",
            "domain.root",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.account.as_deref(), Some("acme"));
        assert_eq!(
            args.selected(),
            vec![
                Selection::Endpoint(EndpointKey::GrandCentral),
                Selection::Domain(DomainKey::Root)
            ]
        );
    }

    #[test]
    fn test_selection_from_str() {
        assert_eq!(
            "com.cloudbees.EndPoints.forge".parse::<Selection>(),
            Ok(Selection::Endpoint(EndpointKey::Forge))
        );
        assert_eq!(
            "domain.grandCentral".parse::<Selection>(),
            Ok(Selection::Domain(DomainKey::GrandCentral))
        );
        assert_eq!(
            "bogus".parse::<Selection>(),
            Err(DomainError::UnknownEndpoint("bogus".to_string()))
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        let err = Args::try_parse_from(["endpoints", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown endpoint: bogus"));
    }

    #[test]
    fn test_unknown_option_and_missing_value() {
        let err = Args::try_parse_from(["endpoints", "--nope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(Args::try_parse_from(["endpoints", "--account"]).is_err());
    }
}
