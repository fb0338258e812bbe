pub mod catalog_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog_config::{BuiltinCatalog, CatalogConfig, TomlCatalogFile};
#[cfg(feature = "cli")]
pub use cli::CliConfig;
