use crate::evaluation::catalog::ComponentCatalog;
use crate::evaluation::domain::{
    ComponentLicense, ContentType, Model, ModelStatus, ReleaseDocument,
};
use crate::shared::error::MotError;

const GITHUB_PREFIX: &str = "https://github.com/";
const HUGGINGFACE_PREFIX: &str = "https://huggingface.co/";

/// Contents of a model file: an exchanged release document, or the declared
/// data of a model written out directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelFile {
    Release(Box<ReleaseDocument>),
    Declared(Model),
}

/// ModelImporter service mapping release documents onto models
pub struct ModelImporter<'a> {
    components: &'a ComponentCatalog,
}

impl<'a> ModelImporter<'a> {
    pub fn new(components: &'a ComponentCatalog) -> Self {
        Self { components }
    }

    pub fn import_file(&self, file: ModelFile) -> Result<Model, MotError> {
        match file {
            ModelFile::Release(document) => self.import(*document),
            ModelFile::Declared(model) => Ok(model),
        }
    }

    /// Builds a model from a release document.
    ///
    /// Components are matched by catalog name, ignoring ASCII case. Imported
    /// models are marked approved.
    pub fn import(&self, document: ReleaseDocument) -> Result<Model, MotError> {
        let release = document.release;
        let mut model = Model::new(release.name.trim()).with_status(ModelStatus::Approved);

        if let Some(version) = non_blank(release.version) {
            model = model.with_version(version);
        }
        if let Some(producer) = non_blank(release.producer) {
            model = model.with_organization(producer);
        }
        if let Some(github) = non_blank(release.github) {
            model = model.with_github(strip_host(&github, GITHUB_PREFIX));
        }
        if let Some(huggingface) = non_blank(release.huggingface) {
            model = model.with_huggingface(strip_host(&huggingface, HUGGINGFACE_PREFIX));
        }

        for content_type in ContentType::ALL {
            if let Some(license) = release.license.for_type(content_type) {
                model = model.with_global_license(content_type, license.clone());
            }
        }
        if let Some(distribution) = release.license.distribution {
            model = model.with_distribution_license(distribution);
        }

        for entry in release.components {
            let component = self.components.get_by_name(&entry.name).ok_or_else(|| {
                MotError::UnknownComponent {
                    name: entry.name.clone(),
                }
            })?;

            model = model.with_licensed_component(
                component.id(),
                ComponentLicense {
                    license: entry.license_name,
                    license_path: entry.license_path,
                    component_path: entry.location,
                },
            );
        }

        tracing::debug!(
            model = model.name(),
            components = model.components().len(),
            "Imported release document"
        );
        Ok(model)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn strip_host(url: &str, prefix: &str) -> String {
    url.trim()
        .strip_prefix(prefix)
        .unwrap_or(url.trim())
        .trim_end_matches('/')
        .to_string()
}
