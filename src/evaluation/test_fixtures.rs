//! Catalog fixtures mirroring the bundled defaults, shared by unit tests.

use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::evaluation::domain::{
    Component, ComponentId, ComponentLicense, ContentType, License, Model, OpennessClass,
};

use ContentType::{Code, Data, Document};
use OpennessClass::{One, Three, Two};

pub(crate) const CLASS_THREE_REQUIRED: [u32; 6] = [9, 10, 11, 12, 13, 14];
pub(crate) const CLASS_TWO_REQUIRED: [u32; 4] = [7, 8, 18, 19];
pub(crate) const CLASS_ONE_REQUIRED: [u32; 4] = [15, 16, 21, 24];

pub(crate) fn component_catalog() -> ComponentCatalog {
    let entries: [(u32, &str, ContentType, OpennessClass, bool); 17] = [
        (7, "Training code", Code, Two, true),
        (8, "Inference code", Code, Two, true),
        (9, "Model architecture", Code, Three, true),
        (10, "Model parameters (Final)", Data, Three, true),
        (11, "Technical report", Document, Three, true),
        (12, "Evaluation results", Document, Three, true),
        (13, "Model card", Document, Three, true),
        (14, "Data card", Document, Three, true),
        (15, "Datasets", Data, One, true),
        (16, "Data preprocessing code", Code, One, true),
        (17, "Model metadata", Data, One, false),
        (18, "Evaluation code", Code, Two, true),
        (19, "Evaluation data", Data, Two, true),
        (20, "Sample model outputs", Data, Three, false),
        (21, "Research paper", Document, One, true),
        (22, "Supporting libraries and tools", Code, Two, false),
        (24, "Model parameters (Intermediate)", Data, One, true),
    ];

    ComponentCatalog::new(
        entries
            .into_iter()
            .map(|(id, name, ct, class, required)| {
                Component::new(ComponentId(id), name, vec![ct], class, required)
            }),
    )
    .unwrap()
}

pub(crate) fn license_catalog() -> LicenseCatalog {
    LicenseCatalog::new([
        License::new("MIT", "MIT License")
            .with_content_types(vec![Code])
            .osi_approved(true)
            .fsf_approved(true),
        License::new("Apache-2.0", "Apache License 2.0")
            .with_content_types(vec![Code])
            .osi_approved(true)
            .fsf_approved(true),
        License::new("CDLA-Permissive-2.0", "Community Data License Agreement Permissive 2.0")
            .with_content_types(vec![Data]),
        License::new("CC-BY-4.0", "Creative Commons Attribution 4.0 International")
            .with_content_types(vec![Data, Document])
            .fsf_approved(true),
        License::new("Llama-3-Community", "Llama 3 Community License")
            .with_content_types(vec![Data]),
    ])
    .unwrap()
}

/// Preferred open license for a single-typed catalog component.
pub(crate) fn open_license_for(id: u32) -> &'static str {
    let catalog = component_catalog();
    match catalog.get(ComponentId(id)).map(|c| c.content_types()[0]) {
        Some(Code) => "MIT",
        Some(Data) => "CDLA-Permissive-2.0",
        _ => "CC-BY-4.0",
    }
}

/// A model declaring every listed component with a matching open license.
pub(crate) fn model_with(ids: impl IntoIterator<Item = u32>) -> Model {
    ids.into_iter().fold(Model::new("fixture"), |model, id| {
        model.with_licensed_component(ComponentId(id), ComponentLicense::new(open_license_for(id)))
    })
}
