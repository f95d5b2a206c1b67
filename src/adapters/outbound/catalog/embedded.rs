use super::parsing::{build_license_catalog, parse_component_catalog, parse_license_list};
use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::ports::outbound::CatalogReader;
use crate::shared::Result;

const BUNDLED_COMPONENTS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/components.yml"));
const BUNDLED_LICENSES: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/licenses.json"));

/// EmbeddedCatalogReader adapter serving the catalogs compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalogReader;

impl EmbeddedCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogReader for EmbeddedCatalogReader {
    fn read_component_catalog(&self) -> Result<ComponentCatalog> {
        Ok(parse_component_catalog(BUNDLED_COMPONENTS, "bundled components.yml")?)
    }

    fn read_license_catalog(&self) -> Result<LicenseCatalog> {
        let licenses = parse_license_list(BUNDLED_LICENSES, "bundled licenses.json")?;
        Ok(build_license_catalog([licenses])?)
    }
}
