//! Endpoints Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the bundled defaults, `.properties` file sources
//! and the environment-style override layers, plus the configuration that
//! wires them into a ready resolver.

pub mod config;
pub mod defaults;
pub mod overrides;

pub use config::{EndpointResolver, ResolverConfig, default_resolver};
pub use defaults::{BundledDefaults, PropertiesFile, read_properties};
pub use overrides::{ProcessEnvironment, SystemProperties};
