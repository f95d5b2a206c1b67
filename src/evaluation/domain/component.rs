use super::class::OpennessClass;
use super::content_type::ContentType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// "Technical report", waivable when a research paper is provided.
    pub const TECHNICAL_REPORT: ComponentId = ComponentId(11);
    /// "Research paper", the substitute for the technical report.
    pub const RESEARCH_PAPER: ComponentId = ComponentId(21);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for ComponentId {
    fn from(value: u32) -> Self {
        ComponentId(value)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A static openness requirement such as "Training code" or "Model card".
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: ComponentId,
    name: String,
    description: String,
    tooltip: String,
    content_types: Vec<ContentType>,
    class: OpennessClass,
    required: bool,
    weight: i32,
    extra_licenses: Vec<String>,
}

impl Component {
    /// Creates a component. `content_types` must not be empty; the catalog
    /// enforces this when loading definitions.
    pub fn new(
        id: ComponentId,
        name: impl Into<String>,
        content_types: Vec<ContentType>,
        class: OpennessClass,
        required: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            tooltip: String::new(),
            content_types,
            class,
            required,
            weight: 0,
            extra_licenses: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_extra_licenses(mut self, extra_licenses: Vec<String>) -> Self {
        self.extra_licenses = extra_licenses;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Content types in declaration order.
    pub fn content_types(&self) -> &[ContentType] {
        &self.content_types
    }

    pub fn class(&self) -> OpennessClass {
        self.class
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn extra_licenses(&self) -> &[String] {
        &self.extra_licenses
    }

    pub fn allows_extra_license(&self, license_id: &str) -> bool {
        self.extra_licenses.iter().any(|l| l == license_id)
    }
}
