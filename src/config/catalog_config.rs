use crate::domain::catalog::{Catalog, GoalPlaybooks, Labels};
use crate::domain::model::Blueprint;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{IdeaError, Result};
use crate::utils::validation::validate_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG: &str = include_str!("../../catalog/blueprints.toml");

/// On-disk shape of a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub strategic_angles: Vec<String>,
    #[serde(default)]
    pub diagnostic_questions: Vec<String>,
    pub labels: Labels,
    pub playbooks: GoalPlaybooks,
    #[serde(default)]
    pub blueprints: Vec<Blueprint>,
}

impl CatalogConfig {
    /// Reads and parses a catalog document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IdeaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates and freezes the document into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(
            self.blueprints,
            self.labels,
            self.playbooks,
            self.strategic_angles,
            self.diagnostic_questions,
        )
    }
}

/// Catalog read from a TOML file chosen at start-up.
#[derive(Debug, Clone)]
pub struct TomlCatalogFile {
    path: PathBuf,
}

impl TomlCatalogFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for TomlCatalogFile {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_catalog(&self) -> Result<Catalog> {
        validate_path("catalog", &self.path.to_string_lossy())?;
        tracing::debug!("Reading catalog from {}", self.path.display());
        CatalogConfig::from_file(&self.path)?.into_catalog()
    }
}

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn source_name(&self) -> String {
        "builtin".to_string()
    }

    fn load_catalog(&self) -> Result<Catalog> {
        CatalogConfig::from_toml_str(BUILTIN_CATALOG)?.into_catalog()
    }
}
