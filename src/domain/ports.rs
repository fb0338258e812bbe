use crate::domain::catalog::Catalog;
use crate::utils::error::Result;

/// Anything that can supply a validated catalog at start-up.
pub trait CatalogProvider {
    fn source_name(&self) -> String;
    fn load_catalog(&self) -> Result<Catalog>;
}
