//! Defaults sources backed by `.properties` text.

mod bundled;
mod properties_file;

pub use bundled::BundledDefaults;
pub use properties_file::PropertiesFile;

use std::io::Read;

use endpoints_application::DefaultsError;
use endpoints_domain::PropertyMap;
use java_properties::PropertiesIter;

/// Parses `.properties` text from `reader` into `properties`.
///
/// Entries are inserted as they are parsed, so on error everything before
/// the offending line is kept. Placeholders are stored literally.
///
/// # Errors
/// Returns `DefaultsError::Parse` if the input is malformed or unreadable.
pub fn read_properties<R: Read>(reader: R, properties: &mut PropertyMap) -> Result<(), DefaultsError> {
    PropertiesIter::new(reader)
        .read_into(|key, value| {
            properties.insert(key, value);
        })
        .map_err(|e| DefaultsError::Parse(e.to_string()))
}
