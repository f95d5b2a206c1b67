use super::definitions::LicenseDefinition;
use crate::evaluation::domain::{Component, ContentType, License, LicenseSelection};
use crate::shared::error::MotError;
use std::collections::{HashMap, HashSet};

/// Licenses accepted as open for data components even when neither OSI
/// nor FSF approved.
pub const OPEN_DATA_LICENSES: &[&str] = &[
    "CC0-1.0",
    "CC-BY-1.0",
    "CC-BY-2.0",
    "CC-BY-2.5",
    "CC-BY-2.5-AU",
    "CC-BY-3.0",
    "CC-BY-3.0-AT",
    "CC-BY-3.0-AU",
    "CC-BY-3.0-DE",
    "CC-BY-3.0-IGO",
    "CC-BY-3.0-NL",
    "CC-BY-3.0-US",
    "CC-BY-4.0",
    "CC-BY-SA-1.0",
    "CC-BY-SA-2.0",
    "CC-BY-SA-2.0-UK",
    "CC-BY-SA-2.1-JP",
    "CC-BY-SA-2.5",
    "CC-BY-SA-3.0",
    "CC-BY-SA-3.0-AT",
    "CC-BY-SA-4.0",
    "CDLA-Permissive-1.0",
    "CDLA-Permissive-2.0",
    "CDLA-Sharing-1.0",
    "ODC-PDDL-1.0",
    "ODC-By-1.0",
    "ODbL-1.0",
    "GFDL-1.3",
    "OGL-Canada-2.0",
    "OGL-UK-2.0",
    "OGL-UK-3.0",
];

/// A selectable license entry: catalog license or sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseOption<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// Read-only catalog of known licenses.
///
/// Approval subsets are computed once at construction so every predicate
/// is a set lookup.
#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    licenses: Vec<License>,
    index: HashMap<String, usize>,
    osi_approved: HashSet<String>,
    fsf_approved: HashSet<String>,
    open_data: HashSet<String>,
    deprecated: HashSet<String>,
}

impl LicenseCatalog {
    /// Builds the catalog. A later entry with an id already present replaces
    /// the earlier one.
    pub fn new(licenses: impl IntoIterator<Item = License>) -> Result<Self, MotError> {
        let mut catalog = LicenseCatalog::default();
        for license in licenses {
            catalog.upsert(license)?;
        }
        catalog.rebuild_subsets();
        Ok(catalog)
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = LicenseDefinition>,
    ) -> Result<Self, MotError> {
        Self::new(definitions.into_iter().map(License::from))
    }

    fn upsert(&mut self, license: License) -> Result<(), MotError> {
        let id = license.license_id().trim();
        if id.is_empty() {
            return Err(MotError::InvalidCatalog {
                catalog: "license".to_string(),
                details: format!("license \"{}\" has an empty licenseId", license.name()),
            });
        }
        if LicenseSelection::is_reserved_name(id) {
            return Err(MotError::InvalidCatalog {
                catalog: "license".to_string(),
                details: format!("licenseId \"{id}\" collides with a reserved license name"),
            });
        }

        match self.index.get(id) {
            Some(&position) => {
                tracing::debug!(license_id = id, "Overriding license definition");
                self.licenses[position] = license;
            }
            None => {
                self.index.insert(id.to_string(), self.licenses.len());
                self.licenses.push(license);
            }
        }
        Ok(())
    }

    fn rebuild_subsets(&mut self) {
        let ids = |predicate: fn(&License) -> bool, licenses: &[License]| -> HashSet<String> {
            licenses
                .iter()
                .filter(|l| predicate(l))
                .map(|l| l.license_id().to_string())
                .collect()
        };

        self.osi_approved = ids(License::is_osi_approved, &self.licenses);
        self.fsf_approved = ids(License::is_fsf_approved, &self.licenses);
        self.deprecated = ids(License::is_deprecated, &self.licenses);
        self.open_data = self
            .licenses
            .iter()
            .filter(|l| l.is_open_data() || OPEN_DATA_LICENSES.contains(&l.license_id()))
            .map(|l| l.license_id().to_string())
            .collect();
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &License> {
        self.licenses.iter()
    }

    pub fn get(&self, license_id: &str) -> Option<&License> {
        self.index.get(license_id).map(|&i| &self.licenses[i])
    }

    pub fn contains(&self, license_id: &str) -> bool {
        self.index.contains_key(license_id)
    }

    /// True when the license exists and applies to at least one of `types`.
    pub fn exists(&self, license_id: &str, types: &[ContentType]) -> bool {
        self.get(license_id)
            .is_some_and(|l| types.iter().any(|t| l.applies_to(*t)))
    }

    /// Catalog licenses applicable to `content_type`, sorted by name, followed
    /// by the selectable sentinels.
    pub fn licenses_by_type(&self, content_type: ContentType) -> Vec<LicenseOption<'_>> {
        let mut options: Vec<LicenseOption<'_>> = self
            .licenses
            .iter()
            .filter(|l| l.applies_to(content_type))
            .map(|l| LicenseOption {
                id: l.license_id(),
                name: l.name(),
            })
            .collect();
        options.sort_by(|a, b| a.name.cmp(b.name));
        options.extend(
            LicenseSelection::SELECTABLE_SENTINELS
                .iter()
                .filter_map(LicenseSelection::sentinel_name)
                .map(|s| LicenseOption { id: s, name: s }),
        );
        options
    }

    pub fn is_osi_approved(&self, license_id: &str) -> bool {
        self.osi_approved.contains(license_id)
    }

    pub fn is_fsf_approved(&self, license_id: &str) -> bool {
        self.fsf_approved.contains(license_id)
    }

    pub fn is_open_data(&self, license_id: &str) -> bool {
        self.open_data.contains(license_id)
    }

    pub fn is_deprecated(&self, license_id: &str) -> bool {
        self.deprecated.contains(license_id)
    }

    /// OSI approved, FSF approved or an accepted open-data license.
    pub fn is_open_source_license(&self, license_id: &str) -> bool {
        self.is_osi_approved(license_id)
            || self.is_fsf_approved(license_id)
            || self.is_open_data(license_id)
    }

    /// True when the license is declared for one of the component's content
    /// types, or is listed among the component's extra licenses.
    pub fn is_type_appropriate(&self, license_id: &str, component: &Component) -> bool {
        self.exists(license_id, component.content_types())
            || component.allows_extra_license(license_id)
    }
}

impl From<LicenseDefinition> for License {
    fn from(def: LicenseDefinition) -> Self {
        License::new(def.license_id.trim(), def.name)
            .with_content_types(def.content_types)
            .with_reference(def.reference, def.reference_number)
            .osi_approved(def.is_osi_approved)
            .fsf_approved(def.is_fsf_libre)
            .open_data(def.is_open_data)
            .deprecated(def.is_deprecated_license_id)
    }
}
