//! Builder for constructing EvaluationReadModel from a use case response

use super::component_view::ComponentRowView;
use super::evaluation_read_model::{
    ClassificationView, EvaluationReadModel, ModelEvaluationView, RunMetadataView,
};
use crate::application::dto::{EvaluatedModel, EvaluationResponse};
use crate::evaluation::catalog::ComponentCatalog;
use crate::evaluation::domain::{Classification, OpennessClass, RunMetadata};
use crate::evaluation::services::BadgeGenerator;

/// Builder for constructing EvaluationReadModel from an EvaluationResponse
pub struct EvaluationReadModelBuilder;

impl EvaluationReadModelBuilder {
    /// Builds the read model for a whole run
    ///
    /// # Arguments
    /// * `response` - Result of the evaluation use case
    /// * `mini_badges` - Collapse badges to the most relevant ones
    pub fn build(response: &EvaluationResponse, mini_badges: bool) -> EvaluationReadModel {
        EvaluationReadModel {
            metadata: Self::build_metadata(&response.metadata),
            models: response
                .models
                .iter()
                .map(|evaluated| Self::build_model(evaluated, &response.components, mini_badges))
                .collect(),
            threshold: response.threshold.map(OpennessClass::number),
            below_threshold: response
                .models_below_threshold()
                .map(|m| m.assessment.model().name().to_string())
                .collect(),
        }
    }

    fn build_metadata(metadata: &RunMetadata) -> RunMetadataView {
        RunMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool: metadata.tool_name().to_string(),
            version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
        }
    }

    fn build_model(
        evaluated: &EvaluatedModel,
        catalog: &ComponentCatalog,
        mini_badges: bool,
    ) -> ModelEvaluationView {
        let assessment = &evaluated.assessment;
        let model = assessment.model();

        let classification = if assessment.is_pending() {
            Classification::PendingEvaluation
        } else {
            assessment.classification()
        };

        let progress = OpennessClass::DESCENDING
            .iter()
            .map(|class| (class.number().to_string(), assessment.progress(*class)))
            .collect();

        ModelEvaluationView {
            name: model.name().to_string(),
            version: model.version().map(str::to_string),
            organization: model.organization().map(str::to_string),
            source: evaluated.source.display().to_string(),
            pending: assessment.is_pending(),
            classification: ClassificationView {
                value: classification.value(),
                label: classification.label().to_string(),
            },
            total_progress: assessment.total_progress(),
            progress,
            conditional_pass: assessment.is_conditional_pass(),
            messages: assessment.messages().to_vec(),
            badges: BadgeGenerator::generate(assessment, mini_badges),
            components: Self::build_components(evaluated, catalog),
            evaluation: assessment.report().clone(),
        }
    }

    /// Class I holds every component of the catalog, so its statuses give
    /// the full picture for one row per component.
    fn build_components(evaluated: &EvaluatedModel, catalog: &ComponentCatalog) -> Vec<ComponentRowView> {
        let report = evaluated.assessment.report();
        catalog
            .components()
            .iter()
            .map(|component| ComponentRowView {
                id: component.id().value(),
                name: component.name().to_string(),
                class: component.class().number(),
                required: component.is_required(),
                status: report
                    .status_of(OpennessClass::One, component.id())
                    .map(|s| s.as_str().to_string()),
                license: report
                    .license_of(OpennessClass::One, component.id())
                    .map(|l| l.as_str().to_string()),
            })
            .collect()
    }
}
