//! Loading the error registry from disk

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{load_registry, load_registry_file, parse_registry, RegistryFormat};
