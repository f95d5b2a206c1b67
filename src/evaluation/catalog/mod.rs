//! Static catalogs the evaluator consults: openness components and licenses.

pub mod component_catalog;
pub mod definitions;
pub mod license_catalog;

pub use component_catalog::ComponentCatalog;
pub use definitions::{ComponentDefinition, ComponentSettings, LicenseDefinition, LicenseList};
pub use license_catalog::{LicenseCatalog, LicenseOption, OPEN_DATA_LICENSES};
