use super::definitions::ComponentDefinition;
use crate::evaluation::domain::{Component, ComponentId, OpennessClass};
use crate::shared::error::MotError;
use std::collections::HashSet;

/// Read-only catalog of openness components, ordered by weight then id.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: Vec<Component>,
}

impl ComponentCatalog {
    pub fn new(components: impl IntoIterator<Item = Component>) -> Result<Self, MotError> {
        let mut components: Vec<Component> = components.into_iter().collect();

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for component in &components {
            if !ids.insert(component.id()) {
                return Err(invalid(format!("duplicate component id {}", component.id())));
            }
            if !names.insert(component.name().to_ascii_lowercase()) {
                return Err(invalid(format!(
                    "duplicate component name \"{}\"",
                    component.name()
                )));
            }
            if component.content_types().is_empty() {
                return Err(invalid(format!(
                    "component {} has no content type",
                    component.id()
                )));
            }
        }

        components.sort_by_key(|c| (c.weight(), c.id()));
        Ok(Self { components })
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ComponentDefinition>,
    ) -> Result<Self, MotError> {
        Self::new(definitions.into_iter().map(Component::from))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Case-insensitive lookup by display name.
    pub fn get_by_name(&self, name: &str) -> Option<&Component> {
        let name = name.trim();
        self.components
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Required components declared for exactly `class`.
    pub fn required(&self, class: OpennessClass) -> Vec<ComponentId> {
        self.in_class(class, true)
    }

    /// Optional components declared for exactly `class`.
    pub fn optional(&self, class: OpennessClass) -> Vec<ComponentId> {
        self.in_class(class, false)
    }

    fn in_class(&self, class: OpennessClass, required: bool) -> Vec<ComponentId> {
        self.components
            .iter()
            .filter(|c| c.class() == class && c.is_required() == required)
            .map(Component::id)
            .collect()
    }
}

fn invalid(details: String) -> MotError {
    MotError::InvalidCatalog {
        catalog: "component".to_string(),
        details,
    }
}

impl From<ComponentDefinition> for Component {
    fn from(def: ComponentDefinition) -> Self {
        Component::new(
            ComponentId(def.id),
            def.name,
            def.content_types,
            def.class,
            def.required,
        )
        .with_description(def.description)
        .with_tooltip(def.tooltip)
        .with_weight(def.weight)
        .with_extra_licenses(def.extra_licenses.unwrap_or_default())
    }
}
