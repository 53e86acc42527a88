//! Property resolution module
//!
//! Provides scanning and resolution of `${key}` placeholders in property
//! values.
//!
//! # Usage
//!
//! ```
//! use endpoints_application::{PropertyResolver, PropertyStore};
//! use endpoints_domain::PropertyMap;
//!
//! let mut defaults = PropertyMap::new();
//! defaults.insert("root".to_string(), "cloudbees.com".to_string());
//! defaults.insert("grandCentral".to_string(), "https://grandcentral.${root}/api".to_string());
//!
//! let resolver = PropertyResolver::without_overrides(PropertyStore::from_properties(defaults));
//! assert_eq!(
//!     resolver.resolve("grandCentral").as_deref(),
//!     Some("https://grandcentral.cloudbees.com/api")
//! );
//! ```

pub mod engine;
pub mod parser;

pub use engine::{DEFAULT_MAX_SUBSTITUTIONS, PropertyResolver, ResolutionResult};
pub use parser::{
    PlaceholderReference, Segment, extract_placeholder_keys, next_segment, parse_placeholders,
};
