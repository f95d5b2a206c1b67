//! Evaluation read model for query operations
//!
//! Aggregates everything a report needs about one run in a
//! serialization-ready shape.

use super::component_view::ComponentRowView;
use crate::evaluation::domain::EvaluationReport;
use crate::evaluation::services::Badge;
use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model for an evaluation run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReadModel {
    pub metadata: RunMetadataView,
    pub models: Vec<ModelEvaluationView>,
    /// Requested class, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    /// Names of models that miss the threshold
    pub below_threshold: Vec<String>,
}

/// View representation of run metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadataView {
    pub timestamp: String,
    pub tool: String,
    pub version: String,
    pub run_id: String,
}

/// Numeric class value with its display label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationView {
    pub value: i8,
    pub label: String,
}

/// View representation of one evaluated model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEvaluationView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Path of the model file
    pub source: String,
    pub pending: bool,
    pub classification: ClassificationView,
    pub total_progress: f64,
    /// Progress per class, keyed "1", "2", "3"
    pub progress: BTreeMap<String, f64>,
    pub conditional_pass: bool,
    pub messages: Vec<String>,
    pub badges: Vec<Badge>,
    pub components: Vec<ComponentRowView>,
    pub evaluation: EvaluationReport,
}

impl EvaluationReadModel {
    /// Looks up a model view by name.
    pub fn model(&self, name: &str) -> Option<&ModelEvaluationView> {
        self.models.iter().find(|m| m.name == name)
    }
}

impl ModelEvaluationView {
    pub fn progress_for(&self, class: u8) -> f64 {
        self.progress
            .get(&class.to_string())
            .copied()
            .unwrap_or(0.0)
    }
}
