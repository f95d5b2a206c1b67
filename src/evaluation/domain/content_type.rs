use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of artifact a component is, and the kind of artifact a license
/// is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Code,
    Data,
    Document,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Code, ContentType::Data, ContentType::Document];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Code => "code",
            ContentType::Data => "data",
            ContentType::Document => "document",
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code" => Ok(ContentType::Code),
            "data" => Ok(ContentType::Data),
            "document" => Ok(ContentType::Document),
            _ => Err(format!(
                "Invalid content type: '{}'. Expected 'code', 'data' or 'document'",
                s
            )),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins content types for display, e.g. "code, data".
pub fn join(types: &[ContentType]) -> String {
    types
        .iter()
        .map(ContentType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Catalog files write content types either as a single string or as a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

fn parse_all(raw: Vec<String>) -> Result<Vec<ContentType>, String> {
    let mut types = Vec::new();
    for value in raw.iter().filter(|v| !v.trim().is_empty()) {
        let parsed = ContentType::from_str(value)?;
        if !types.contains(&parsed) {
            types.push(parsed);
        }
    }
    Ok(types)
}

/// Deserializes `"code"` or `["code", "data"]` into an ordered, de-duplicated
/// list. Empty strings are dropped, so the result may be empty.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<ContentType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<OneOrMany>::deserialize(deserializer)?;
    parse_all(raw.map(OneOrMany::into_vec).unwrap_or_default()).map_err(serde::de::Error::custom)
}

/// Same as [`deserialize_lenient`] but rejects an empty result.
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Vec<ContentType>, D::Error>
where
    D: Deserializer<'de>,
{
    let types = deserialize_lenient(deserializer)?;
    if types.is_empty() {
        return Err(serde::de::Error::custom(
            "content type must name at least one of 'code', 'data' or 'document'",
        ));
    }
    Ok(types)
}
