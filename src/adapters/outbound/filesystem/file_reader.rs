use crate::evaluation::domain::{Model, ReleaseDocument};
use crate::evaluation::services::ModelFile;
use crate::ports::outbound::ModelReader;
use crate::shared::error::MotError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading model files from disk
///
/// `.json` files are parsed as JSON, everything else as YAML. A document
/// with a top-level `release` key is an exchanged release document; any
/// other mapping is read as declared model data.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelReader for FileSystemReader {
    fn read_model(&self, path: &Path) -> Result<ModelFile> {
        let content = read_input_file(path, "model file")?;
        Ok(parse_model_file(path, &content)?)
    }
}

/// Parses model file contents, choosing the syntax from the file extension.
pub fn parse_model_file(path: &Path, content: &str) -> std::result::Result<ModelFile, MotError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parse_error = |details: String| MotError::ModelParseError {
        path: path.to_path_buf(),
        details,
    };

    let (file, declares_components) = if is_json {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let declares_components = value.get("components").is_some();
        let file = if value.get("release").is_some() {
            let document: ReleaseDocument =
                serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?;
            ModelFile::Release(Box::new(document))
        } else {
            ModelFile::Declared(
                serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?,
            )
        };
        (file, declares_components)
    } else {
        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let declares_components = value.get("components").is_some();
        let file = if value.get("release").is_some() {
            let document: ReleaseDocument =
                serde_yaml_ng::from_value(value).map_err(|e| parse_error(e.to_string()))?;
            ModelFile::Release(Box::new(document))
        } else {
            ModelFile::Declared(
                serde_yaml_ng::from_value(value).map_err(|e| parse_error(e.to_string()))?,
            )
        };
        (file, declares_components)
    };

    match file {
        ModelFile::Declared(model) => {
            declared_model(path, model, declares_components).map(ModelFile::Declared)
        }
        release => Ok(release),
    }
}

/// A declared file must carry a `components` key; an empty list is a valid
/// model that includes nothing.
fn declared_model(
    path: &Path,
    model: Model,
    declares_components: bool,
) -> std::result::Result<Model, MotError> {
    if !declares_components && model.license_data().components.is_empty() {
        return Err(MotError::ModelParseError {
            path: path.to_path_buf(),
            details: "expected a `release` document or declared `components`".to_string(),
        });
    }

    if model.name().trim().is_empty() {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string();
        return Ok(model.with_name(stem));
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::domain::{Classification, ComponentId, OpennessClass};
    use crate::evaluation::services::{ModelEvaluator, ModelImporter};
    use crate::evaluation::test_fixtures::{component_catalog, license_catalog};
    use std::fs;
    use tempfile::TempDir;

    const RELEASE_YAML: &str = r#"
release:
  name: Olmo
  version: 7B
  producer: Ai2
  components:
    - name: Model architecture
      license_name: Apache-2.0
"#;

    #[test]
    fn test_read_release_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("olmo.yml");
        fs::write(&path, RELEASE_YAML).unwrap();

        let file = FileSystemReader::new().read_model(&path).unwrap();
        match file {
            ModelFile::Release(document) => {
                assert_eq!(document.release.name, "Olmo");
                assert_eq!(document.release.components.len(), 1);
            }
            other => panic!("expected a release document, got {other:?}"),
        }
    }

    #[test]
    fn test_read_declared_json_uses_file_stem_as_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("declared-model.json");
        fs::write(
            &path,
            r#"{"components": [9], "licenseData": {"global": {"distribution": {"name": "MIT"}}}}"#,
        )
        .unwrap();

        let file = FileSystemReader::new().read_model(&path).unwrap();
        match file {
            ModelFile::Declared(model) => {
                assert_eq!(model.name(), "declared-model");
                assert!(model.includes(ComponentId(9)));
            }
            other => panic!("expected declared data, got {other:?}"),
        }
    }

    #[test]
    fn test_json_extension_is_case_insensitive() {
        let path = Path::new("MODEL.JSON");
        let result = parse_model_file(path, r#"{"release": {"name": "m"}}"#);
        assert!(matches!(result, Ok(ModelFile::Release(_))));
    }

    #[test]
    fn test_malformed_release_is_an_error() {
        let path = Path::new("broken.yaml");
        let result = parse_model_file(path, "release:\n  components: 3\n");
        assert!(matches!(result, Err(MotError::ModelParseError { .. })));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let path = Path::new("empty.yml");
        let result = parse_model_file(path, "name: nothing here\n");
        assert!(matches!(result, Err(MotError::ModelParseError { .. })));
    }

    #[test]
    fn test_declared_empty_component_list_is_unclassified() {
        let components = component_catalog();
        let licenses = license_catalog();
        let path = Path::new("e.json");

        let file = parse_model_file(path, r#"{"name":"x","components":[]}"#).unwrap();
        let model = ModelImporter::new(&components).import_file(file).unwrap();
        let assessment = ModelEvaluator::new(&components, &licenses).assess(model);

        assert_eq!(assessment.model().name(), "x");
        assert_eq!(assessment.classification(), Classification::Unclassified);
        assert_eq!(assessment.progress(OpennessClass::Three), 0.0);
        assert_eq!(
            assessment
                .report()
                .class(OpennessClass::Three)
                .components
                .missing
                .len(),
            components.required(OpennessClass::Three).len()
        );
    }

    #[test]
    fn test_declared_empty_component_list_in_yaml() {
        let result = parse_model_file(Path::new("e.yml"), "name: x\ncomponents: []\n");
        assert!(matches!(result, Ok(ModelFile::Declared(_))));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_model(&temp_dir.path().join("none.yml"));
        assert!(result.is_err());
    }
}
