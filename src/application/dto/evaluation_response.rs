use crate::evaluation::catalog::ComponentCatalog;
use crate::evaluation::domain::{OpennessClass, RunMetadata};
use crate::evaluation::services::ModelAssessment;
use std::path::PathBuf;

/// One evaluated model file.
#[derive(Debug, Clone)]
pub struct EvaluatedModel {
    pub source: PathBuf,
    pub assessment: ModelAssessment,
}

/// EvaluationResponse - Output of the batch evaluation use case
///
/// Carries the component catalog used for the run so that adapters can
/// render component names without reloading it.
#[derive(Debug, Clone)]
pub struct EvaluationResponse {
    /// Results in request order
    pub models: Vec<EvaluatedModel>,
    pub components: ComponentCatalog,
    pub metadata: RunMetadata,
    pub threshold: Option<OpennessClass>,
    /// True when a threshold was set and at least one model misses it
    pub has_models_below_threshold: bool,
}

impl EvaluationResponse {
    pub fn new(
        models: Vec<EvaluatedModel>,
        components: ComponentCatalog,
        metadata: RunMetadata,
        threshold: Option<OpennessClass>,
    ) -> Self {
        let has_models_below_threshold = threshold.is_some_and(|required| {
            models.iter().any(|m| !m.assessment.meets(required))
        });
        Self {
            models,
            components,
            metadata,
            threshold,
            has_models_below_threshold,
        }
    }

    /// Models that miss the threshold, if one was set.
    pub fn models_below_threshold(&self) -> impl Iterator<Item = &EvaluatedModel> {
        self.models.iter().filter(move |m| {
            self.threshold
                .is_some_and(|required| !m.assessment.meets(required))
        })
    }
}
