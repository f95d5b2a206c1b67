use super::model::GlobalLicenses;
use serde::{Deserialize, Deserializer, Serialize};

/// Exchanged model file: `framework` header plus the `release` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkInfo>,
    pub release: Release,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "scalar_string")]
    pub model_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub architecture: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub producer: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub contact: Option<String>,
    #[serde(default, alias = "repository", deserialize_with = "scalar_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub huggingface: Option<String>,
    #[serde(default)]
    pub license: GlobalLicenses,
    #[serde(default)]
    pub components: Vec<ReleaseComponent>,
}

/// A component entry of a release, identified by catalog name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseComponent {
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: Option<String>,
    #[serde(default, alias = "component_path", deserialize_with = "scalar_string")]
    pub location: Option<String>,
    #[serde(default, alias = "license", deserialize_with = "scalar_string")]
    pub license_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub license_path: Option<String>,
}

/// YAML writes `version: 1.0` as a number; accept any scalar as text.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Flag(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_yaml() {
        let yaml = r#"
framework:
  name: Model Openness Framework
  version: 1.0
  date: '2024-12-15'
release:
  name: Pythia
  version: 6.9
  producer: EleutherAI
  github: https://github.com/EleutherAI/pythia
  license:
    code:
      name: Apache-2.0
      path: LICENSE
  components:
    - name: Model architecture
      location: models/
      license_name: Apache-2.0
      license_path: LICENSE
    - name: Model card
      license: CC-BY-4.0
"#;
        let doc: ReleaseDocument = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(doc.release.name, "Pythia");
        assert_eq!(doc.release.version.as_deref(), Some("6.9"));
        assert_eq!(doc.framework.unwrap().version.as_deref(), Some("1"));
        assert_eq!(doc.release.license.code.unwrap().name, "Apache-2.0");
        assert_eq!(doc.release.components.len(), 2);
        assert_eq!(
            doc.release.components[1].license_name.as_deref(),
            Some("CC-BY-4.0")
        );
    }

    #[test]
    fn test_null_fields_are_none() {
        let json = r#"{"release": {"name": "m", "version": null, "components": [
            {"name": "Model card", "license_name": null}
        ]}}"#;
        let doc: ReleaseDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.release.version, None);
        assert_eq!(doc.release.components[0].license_name, None);
    }
}
