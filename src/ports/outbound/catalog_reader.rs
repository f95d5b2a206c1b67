use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::shared::Result;

/// Both catalogs an evaluation run consults.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub components: ComponentCatalog,
    pub licenses: LicenseCatalog,
}

/// CatalogReader port for loading reference data
///
/// Implementations decide where the component and license catalogs come
/// from (bundled data, files on disk, test fixtures).
pub trait CatalogReader {
    /// Loads and validates the component catalog
    ///
    /// # Errors
    /// Returns an error if the source cannot be read, is malformed, or
    /// repeats a component id or name
    fn read_component_catalog(&self) -> Result<ComponentCatalog>;

    /// Loads and validates the license catalog
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or is malformed
    fn read_license_catalog(&self) -> Result<LicenseCatalog>;

    fn load_catalogs(&self) -> Result<Catalogs> {
        Ok(Catalogs {
            components: self.read_component_catalog()?,
            licenses: self.read_license_catalog()?,
        })
    }
}
