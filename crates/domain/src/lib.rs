//! Endpoints Domain - Core property types
//!
//! This crate defines the domain model for endpoint property resolution:
//! property maps, the well-known endpoint keys and the small text helpers
//! used by the accessors. All types here are pure Rust with no I/O.

pub mod endpoint;
pub mod error;
pub mod property;
pub mod text;

pub use endpoint::{DomainKey, EndpointKey};
pub use error::DomainError;
pub use property::{PropertyMap, PropertySourceKind, ResolvedProperty};
pub use text::{format_template, is_empty, remove_end};
