use super::component::ComponentId;
use super::content_type::ContentType;
use super::license::LicenseSelection;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Review status of a submitted model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Approved,
    #[default]
    Unapproved,
    Rejected,
}

impl ModelStatus {
    pub fn label(self) -> &'static str {
        match self {
            ModelStatus::Approved => "Approved",
            ModelStatus::Unapproved => "Unapproved",
            ModelStatus::Rejected => "Rejected",
        }
    }
}

/// A release-wide license assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalLicense {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl GlobalLicense {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Global licenses per content type plus the distribution-wide fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalLicenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<GlobalLicense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<GlobalLicense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<GlobalLicense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<GlobalLicense>,
}

impl GlobalLicenses {
    pub fn for_type(&self, content_type: ContentType) -> Option<&GlobalLicense> {
        match content_type {
            ContentType::Code => self.code.as_ref(),
            ContentType::Data => self.data.as_ref(),
            ContentType::Document => self.document.as_ref(),
        }
    }

    pub fn set_for_type(&mut self, content_type: ContentType, license: GlobalLicense) {
        let slot = match content_type {
            ContentType::Code => &mut self.code,
            ContentType::Data => &mut self.data,
            ContentType::Document => &mut self.document,
        };
        *slot = Some(license);
    }

    pub fn distribution(&self) -> Option<&GlobalLicense> {
        self.distribution.as_ref()
    }
}

/// Per-component license override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentLicense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_path: Option<String>,
}

impl ComponentLicense {
    pub fn new(license: impl Into<String>) -> Self {
        Self {
            license: Some(license.into()),
            ..Self::default()
        }
    }
}

/// License assignments declared for a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseData {
    #[serde(default)]
    pub global: GlobalLicenses,
    #[serde(default, deserialize_with = "deserialize_component_keys")]
    pub components: BTreeMap<ComponentId, ComponentLicense>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
enum IdKey {
    Number(u32),
    Text(String),
}

/// Accepts `13:` as well as `"13":` keys, so YAML files in the JSON
/// shape load the same way.
fn deserialize_component_keys<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<ComponentId, ComponentLicense>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<IdKey, ComponentLicense>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, license)| {
            let id = match key {
                IdKey::Number(id) => id,
                IdKey::Text(text) => text.trim().parse::<u32>().map_err(|_| {
                    <D::Error as serde::de::Error>::custom(format!(
                        "invalid component id '{text}'"
                    ))
                })?,
            };
            Ok((ComponentId(id), license))
        })
        .collect()
}

/// A submitted model release under evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    huggingface: Option<String>,
    #[serde(default)]
    status: ModelStatus,
    #[serde(default)]
    components: BTreeSet<ComponentId>,
    #[serde(default)]
    license_data: LicenseData,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_github(mut self, slug: impl Into<String>) -> Self {
        self.github = Some(slug.into());
        self
    }

    pub fn with_huggingface(mut self, slug: impl Into<String>) -> Self {
        self.huggingface = Some(slug.into());
        self
    }

    pub fn with_status(mut self, status: ModelStatus) -> Self {
        self.status = status;
        self
    }

    /// Declares a component as included, without a component-specific license.
    pub fn with_component(mut self, id: ComponentId) -> Self {
        self.components.insert(id);
        self
    }

    /// Declares a component as included with the given license assignment.
    pub fn with_licensed_component(mut self, id: ComponentId, license: ComponentLicense) -> Self {
        self.components.insert(id);
        self.license_data.components.insert(id, license);
        self
    }

    pub fn with_global_license(mut self, content_type: ContentType, license: GlobalLicense) -> Self {
        self.license_data.global.set_for_type(content_type, license);
        self
    }

    pub fn with_distribution_license(mut self, license: GlobalLicense) -> Self {
        self.license_data.global.distribution = Some(license);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    pub fn huggingface(&self) -> Option<&str> {
        self.huggingface.as_deref()
    }

    pub fn status(&self) -> ModelStatus {
        self.status
    }

    pub fn components(&self) -> &BTreeSet<ComponentId> {
        &self.components
    }

    pub fn includes(&self, id: ComponentId) -> bool {
        self.components.contains(&id)
    }

    pub fn license_data(&self) -> &LicenseData {
        &self.license_data
    }

    /// A model is pending while any component license is "Pending evaluation".
    pub fn is_pending(&self) -> bool {
        self.license_data.components.values().any(|c| {
            c.license.as_deref().and_then(LicenseSelection::parse)
                == Some(LicenseSelection::PendingEvaluation)
        })
    }
}
