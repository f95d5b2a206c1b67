//! Raw catalog entries as they appear in catalog files.
//!
//! These are mapped field by field into the validated domain types by
//! [`LicenseCatalog`](super::LicenseCatalog) and
//! [`ComponentCatalog`](super::ComponentCatalog).

use crate::evaluation::domain::content_type::{self, ContentType};
use crate::evaluation::domain::OpennessClass;
use serde::Deserialize;

/// One license entry of an SPDX-style license list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDefinition {
    pub license_id: String,
    pub name: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub reference_number: Option<u32>,
    #[serde(default)]
    pub is_osi_approved: bool,
    #[serde(default)]
    pub is_fsf_libre: bool,
    #[serde(default)]
    pub is_deprecated_license_id: bool,
    /// Marks an open-data license in addition to the built-in allowlist.
    #[serde(default)]
    pub is_open_data: bool,
    #[serde(
        rename = "ContentType",
        default,
        deserialize_with = "content_type::deserialize_lenient"
    )]
    pub content_types: Vec<ContentType>,
}

/// Top-level shape of a license catalog file (`{"licenses": [...]}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseList {
    #[serde(default)]
    pub license_list_version: Option<String>,
    pub licenses: Vec<LicenseDefinition>,
}

/// One component entry of the component settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDefinition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tooltip: String,
    #[serde(
        rename = "content_type",
        alias = "contentType",
        deserialize_with = "content_type::deserialize_non_empty"
    )]
    pub content_types: Vec<ContentType>,
    pub class: OpennessClass,
    pub required: bool,
    #[serde(default)]
    pub weight: i32,
    #[serde(default, alias = "extraLicenses")]
    pub extra_licenses: Option<Vec<String>>,
}

/// Top-level shape of the component settings file (`components: [...]`).
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSettings {
    pub components: Vec<ComponentDefinition>,
}
