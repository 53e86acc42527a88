//! Defaults compiled into the binary.

use endpoints_application::{DefaultsError, DefaultsSource};
use endpoints_domain::PropertyMap;

use super::read_properties;

const BUNDLED_PROPERTIES: &str = include_str!("../../resources/endpoints.properties");

/// The `endpoints.properties` resource shipped with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDefaults;

impl DefaultsSource for BundledDefaults {
    fn name(&self) -> &str {
        "bundled:endpoints.properties"
    }

    fn read_into(&self, properties: &mut PropertyMap) -> Result<(), DefaultsError> {
        read_properties(BUNDLED_PROPERTIES.as_bytes(), properties)
    }
}
