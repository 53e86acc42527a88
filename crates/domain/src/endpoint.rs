//! Well-known endpoint and domain property keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A named service endpoint backed by one property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndpointKey {
    /// The Grand Central web API.
    GrandCentral,
    /// The Grand Central REST API.
    GcApi,
    /// The application run API.
    RunApi,
    /// The licensing service.
    Licenses,
    /// The per-account forge template (contains one `%s`).
    Forge,
}

impl EndpointKey {
    /// Every endpoint, in display order.
    pub const ALL: [Self; 5] = [
        Self::GrandCentral,
        Self::GcApi,
        Self::RunApi,
        Self::Licenses,
        Self::Forge,
    ];

    /// Returns the property key this endpoint resolves.
    #[must_use]
    pub const fn property_key(self) -> &'static str {
        match self {
            Self::GrandCentral => "com.cloudbees.EndPoints.grandCentral",
            Self::GcApi => "com.cloudbees.EndPoints.gcApi",
            Self::RunApi => "com.cloudbees.EndPoints.runApi",
            Self::Licenses => "com.cloudbees.EndPoints.licenses",
            Self::Forge => "com.cloudbees.EndPoints.forge",
        }
    }

    /// Returns the short name used on the command line and in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GrandCentral => "grandCentral",
            Self::GcApi => "gcApi",
            Self::RunApi => "runApi",
            Self::Licenses => "licenses",
            Self::Forge => "forge",
        }
    }

    /// Returns true if the resolved value is a template needing an argument.
    #[must_use]
    pub const fn is_template(self) -> bool {
        matches!(self, Self::Forge)
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EndpointKey {
    type Err = DomainError;

    /// Accepts the short name (case-insensitive) or the full property key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s) || key.property_key() == s)
            .ok_or_else(|| DomainError::UnknownEndpoint(s.to_string()))
    }
}

/// A domain-name property, resolved without trailing-slash trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainKey {
    /// The root domain every default endpoint is derived from.
    Root,
    /// The host name of Grand Central.
    GrandCentral,
}

impl DomainKey {
    /// Every domain key, in display order.
    pub const ALL: [Self; 2] = [Self::Root, Self::GrandCentral];

    /// Returns the property key this domain name resolves.
    #[must_use]
    pub const fn property_key(self) -> &'static str {
        match self {
            Self::Root => "com.cloudbees.Domain",
            Self::GrandCentral => "com.cloudbees.Domain.grandCentral",
        }
    }

    /// Returns the short name used in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "domain.root",
            Self::GrandCentral => "domain.grandCentral",
        }
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DomainKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s) || key.property_key() == s)
            .ok_or_else(|| DomainError::UnknownEndpoint(s.to_string()))
    }
}
