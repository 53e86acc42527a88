//! Defaults read from a `.properties` file on disk.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

use endpoints_application::{DefaultsError, DefaultsSource};
use endpoints_domain::PropertyMap;

use super::read_properties;

/// A `.properties` file, re-read on every load.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
    name: String,
}

impl PropertiesFile {
    /// Creates a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    /// Verifies that the file exists.
    ///
    /// # Errors
    /// Returns `DefaultsError::NotFound` if there is no regular file at the path.
    pub fn check(&self) -> Result<(), DefaultsError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(DefaultsError::NotFound(self.path.display().to_string()))
        }
    }
}

impl DefaultsSource for PropertiesFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_into(&self, properties: &mut PropertyMap) -> Result<(), DefaultsError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DefaultsError::NotFound(self.path.display().to_string()),
            _ => DefaultsError::Io(e),
        })?;
        read_properties(BufReader::new(file), properties)
    }
}
