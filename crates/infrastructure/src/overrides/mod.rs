//! Override layers consulted ahead of the property store.

mod process_env;
mod system_properties;

pub use process_env::ProcessEnvironment;
pub use system_properties::SystemProperties;
