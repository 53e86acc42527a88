//! Defaults source port
//!
//! Defines where the compiled-in default properties come from.

use endpoints_domain::PropertyMap;

/// Errors that can occur while reading a defaults source.
#[derive(Debug, thiserror::Error)]
pub enum DefaultsError {
    /// The source does not exist.
    #[error("Defaults source not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source content could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A source of default property values.
///
/// Implementations write entries into `properties` as they parse them, so a
/// failure part-way through still leaves the entries read so far in place.
pub trait DefaultsSource: Send + Sync {
    /// Human-readable name of the source, used in log events.
    fn name(&self) -> &str;

    /// Reads the source, inserting every parsed entry into `properties`.
    ///
    /// # Errors
    /// Returns an error if the source is missing or cannot be fully read.
    /// Entries parsed before the failure remain in `properties`.
    fn read_into(&self, properties: &mut PropertyMap) -> Result<(), DefaultsError>;
}

impl DefaultsSource for PropertyMap {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn read_into(&self, properties: &mut PropertyMap) -> Result<(), DefaultsError> {
        properties.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }
}

impl<T: DefaultsSource + ?Sized> DefaultsSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_into(&self, properties: &mut PropertyMap) -> Result<(), DefaultsError> {
        (**self).read_into(properties)
    }
}
