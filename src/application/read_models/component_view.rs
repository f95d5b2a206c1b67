//! Component row view for the read model
//!
//! One row per catalog component, flattened for tabular output.

use serde::Serialize;

/// View representation of a catalog component in one model's evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRowView {
    pub id: u32,
    pub name: String,
    /// Strictest class that lists the component
    pub class: u8,
    pub required: bool,
    /// Status as of the Class I evaluation, `None` when never evaluated
    pub status: Option<String>,
    /// Resolved license as of the Class I evaluation
    pub license: Option<String>,
}
