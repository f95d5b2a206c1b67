use mot_eval::prelude::*;

/// Mock CatalogReader for testing
///
/// Serves the bundled catalogs unless replaced, and can be told to fail.
#[derive(Default)]
pub struct MockCatalogReader {
    pub components: Option<ComponentCatalog>,
    pub licenses: Option<LicenseCatalog>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_licenses(mut self, licenses: LicenseCatalog) -> Self {
        self.licenses = Some(licenses);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_component_catalog(&self) -> Result<ComponentCatalog> {
        if self.should_fail {
            anyhow::bail!("Mock component catalog failure");
        }
        match &self.components {
            Some(components) => Ok(components.clone()),
            None => EmbeddedCatalogReader::new().read_component_catalog(),
        }
    }

    fn read_license_catalog(&self) -> Result<LicenseCatalog> {
        match &self.licenses {
            Some(licenses) => Ok(licenses.clone()),
            None => EmbeddedCatalogReader::new().read_license_catalog(),
        }
    }
}
