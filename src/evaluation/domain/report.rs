use super::class::OpennessClass;
use super::component::ComponentId;
use super::license::LicenseSelection;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Bucket a component lands in for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentStatus {
    Missing,
    Included,
    Invalid,
    Unlicensed,
    Optional,
}

impl ComponentStatus {
    pub const ALL: [ComponentStatus; 5] = [
        ComponentStatus::Missing,
        ComponentStatus::Included,
        ComponentStatus::Invalid,
        ComponentStatus::Unlicensed,
        ComponentStatus::Optional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentStatus::Missing => "missing",
            ComponentStatus::Included => "included",
            ComponentStatus::Invalid => "invalid",
            ComponentStatus::Unlicensed => "unlicensed",
            ComponentStatus::Optional => "optional",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component ids grouped by status for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentBuckets {
    pub missing: Vec<ComponentId>,
    pub included: Vec<ComponentId>,
    pub invalid: Vec<ComponentId>,
    pub unlicensed: Vec<ComponentId>,
    pub optional: Vec<ComponentId>,
}

impl ComponentBuckets {
    pub fn bucket(&self, status: ComponentStatus) -> &[ComponentId] {
        match status {
            ComponentStatus::Missing => &self.missing,
            ComponentStatus::Included => &self.included,
            ComponentStatus::Invalid => &self.invalid,
            ComponentStatus::Unlicensed => &self.unlicensed,
            ComponentStatus::Optional => &self.optional,
        }
    }

    pub fn bucket_mut(&mut self, status: ComponentStatus) -> &mut Vec<ComponentId> {
        match status {
            ComponentStatus::Missing => &mut self.missing,
            ComponentStatus::Included => &mut self.included,
            ComponentStatus::Invalid => &mut self.invalid,
            ComponentStatus::Unlicensed => &mut self.unlicensed,
            ComponentStatus::Optional => &mut self.optional,
        }
    }

    /// First bucket that lists the component, in `ComponentStatus::ALL` order.
    pub fn status_of(&self, id: ComponentId) -> Option<ComponentStatus> {
        ComponentStatus::ALL
            .into_iter()
            .find(|status| self.bucket(*status).contains(&id))
    }

    pub fn remove(&mut self, status: ComponentStatus, id: ComponentId) {
        self.bucket_mut(status).retain(|c| *c != id);
    }
}

/// Evaluation of one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassEvaluation {
    pub components: ComponentBuckets,
    pub licenses: BTreeMap<ComponentId, LicenseSelection>,
}

impl ClassEvaluation {
    pub fn record(&mut self, id: ComponentId, status: ComponentStatus, license: LicenseSelection) {
        self.components.bucket_mut(status).push(id);
        self.licenses.insert(id, license);
    }
}

/// Result of evaluating a model against all three classes.
///
/// Serializes to `{"1": {...}, "2": {...}, "3": {...}, "not-type-appropriate": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    classes: [ClassEvaluation; 3],
    not_type_appropriate: Vec<ComponentId>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(class: OpennessClass) -> usize {
        usize::from(class.number()) - 1
    }

    pub fn class(&self, class: OpennessClass) -> &ClassEvaluation {
        &self.classes[Self::index(class)]
    }

    pub fn class_mut(&mut self, class: OpennessClass) -> &mut ClassEvaluation {
        &mut self.classes[Self::index(class)]
    }

    /// Components with an open license that does not match their content type.
    pub fn not_type_appropriate(&self) -> &[ComponentId] {
        &self.not_type_appropriate
    }

    pub fn flag_not_type_appropriate(&mut self, id: ComponentId) {
        if !self.not_type_appropriate.contains(&id) {
            self.not_type_appropriate.push(id);
        }
    }

    pub fn status_of(&self, class: OpennessClass, id: ComponentId) -> Option<ComponentStatus> {
        self.class(class).components.status_of(id)
    }

    pub fn license_of(&self, class: OpennessClass, id: ComponentId) -> Option<&LicenseSelection> {
        self.class(class).licenses.get(&id)
    }
}

impl Serialize for EvaluationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for class in [OpennessClass::One, OpennessClass::Two, OpennessClass::Three] {
            map.serialize_entry(&class.number().to_string(), self.class(class))?;
        }
        map.serialize_entry("not-type-appropriate", &self.not_type_appropriate)?;
        map.end()
    }
}
