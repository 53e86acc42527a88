//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and the outside
//! world. Each port is a trait that adapters in the infrastructure layer
//! implement.

mod defaults_source;
mod override_layer;

pub use defaults_source::{DefaultsError, DefaultsSource};
pub use override_layer::{Chain, NoOverrides, OverrideLayer};
