use super::embedded::EmbeddedCatalogReader;
use super::parsing::{build_license_catalog, parse_component_catalog, parse_license_list};
use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::ports::outbound::CatalogReader;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// FileSystemCatalogReader adapter reading catalogs from user-supplied files
///
/// A catalog without a configured file falls back to the bundled one.
/// License files replace the bundled list and are applied in order.
#[derive(Debug, Default, Clone)]
pub struct FileSystemCatalogReader {
    components_file: Option<PathBuf>,
    license_files: Vec<PathBuf>,
    bundled: EmbeddedCatalogReader,
}

impl FileSystemCatalogReader {
    pub fn new(components_file: Option<PathBuf>, license_files: Vec<PathBuf>) -> Self {
        Self {
            components_file,
            license_files,
            bundled: EmbeddedCatalogReader::new(),
        }
    }
}

impl CatalogReader for FileSystemCatalogReader {
    fn read_component_catalog(&self) -> Result<ComponentCatalog> {
        let Some(path) = &self.components_file else {
            return self.bundled.read_component_catalog();
        };

        let content = read_input_file(path, "component catalog")?;
        let catalog = parse_component_catalog(&content, &path.display().to_string())
            .with_context(|| format!("Failed to load component catalog {}", path.display()))?;
        tracing::info!(path = %path.display(), components = catalog.len(), "Loaded component catalog");
        Ok(catalog)
    }

    fn read_license_catalog(&self) -> Result<LicenseCatalog> {
        if self.license_files.is_empty() {
            return self.bundled.read_license_catalog();
        }

        let mut lists = Vec::with_capacity(self.license_files.len());
        for path in &self.license_files {
            let content = read_input_file(path, "license catalog")?;
            lists.push(parse_license_list(&content, &path.display().to_string())?);
        }

        let catalog = build_license_catalog(lists)?;
        tracing::info!(
            files = self.license_files.len(),
            licenses = catalog.len(),
            "Loaded license catalog"
        );
        Ok(catalog)
    }
}
