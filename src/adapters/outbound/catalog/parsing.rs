use crate::evaluation::catalog::{
    ComponentCatalog, ComponentSettings, LicenseCatalog, LicenseDefinition, LicenseList,
};
use crate::shared::error::MotError;

/// Parses a YAML component settings document into a validated catalog.
pub fn parse_component_catalog(content: &str, source: &str) -> Result<ComponentCatalog, MotError> {
    let settings: ComponentSettings =
        serde_yaml_ng::from_str(content).map_err(|e| MotError::InvalidCatalog {
            catalog: "component".to_string(),
            details: format!("{source}: {e}"),
        })?;

    tracing::debug!(source, components = settings.components.len(), "Parsed component catalog");
    ComponentCatalog::from_definitions(settings.components)
}

/// Parses one SPDX-style JSON license list.
pub fn parse_license_list(content: &str, source: &str) -> Result<Vec<LicenseDefinition>, MotError> {
    let list: LicenseList = serde_json::from_str(content).map_err(|e| MotError::InvalidCatalog {
        catalog: "license".to_string(),
        details: format!("{source}: {e}"),
    })?;

    tracing::debug!(
        source,
        licenses = list.licenses.len(),
        version = list.license_list_version.as_deref().unwrap_or("unversioned"),
        "Parsed license list"
    );
    Ok(list.licenses)
}

/// Builds a license catalog from several lists; later lists override
/// earlier entries with the same id.
pub fn build_license_catalog(
    lists: impl IntoIterator<Item = Vec<LicenseDefinition>>,
) -> Result<LicenseCatalog, MotError> {
    LicenseCatalog::from_definitions(lists.into_iter().flatten())
}
