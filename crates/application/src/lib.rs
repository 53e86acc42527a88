//! Endpoints Application - Property resolution
//!
//! This crate holds the property store, the `${key}` resolution engine and
//! the endpoint accessors built on top of it. Data sources and override
//! layers are reached through the traits in [`ports`]; concrete adapters
//! live in the infrastructure crate.

pub mod endpoints;
pub mod error;
pub mod ports;
pub mod property_resolver;
pub mod property_store;

pub use endpoints::{Domain, EndPoints};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Chain, DefaultsError, DefaultsSource, NoOverrides, OverrideLayer};
pub use property_resolver::{DEFAULT_MAX_SUBSTITUTIONS, PropertyResolver, ResolutionResult};
pub use property_store::PropertyStore;
