use crate::application::dto::{EvaluatedModel, EvaluationRequest, EvaluationResponse};
use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::evaluation::domain::Model;
use crate::evaluation::services::{ModelAssessment, ModelEvaluator, ModelImporter, RunMetadataGenerator};
use crate::ports::outbound::{CatalogReader, ModelReader, ProgressReporter};
use crate::shared::error::MotError;
use crate::shared::Result;
use anyhow::Context;
use rayon::prelude::*;
use std::path::PathBuf;

/// EvaluateModelsUseCase - Core use case for batch model evaluation
///
/// Loads both catalogs once, reads every model file, then evaluates the
/// models independently in parallel.
///
/// # Type Parameters
/// * `MR` - ModelReader implementation
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct EvaluateModelsUseCase<MR, CR, PR> {
    model_reader: MR,
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<MR, CR, PR> EvaluateModelsUseCase<MR, CR, PR>
where
    MR: ModelReader,
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new EvaluateModelsUseCase with injected dependencies
    pub fn new(model_reader: MR, catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            model_reader,
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the evaluation use case
    ///
    /// # Returns
    /// One assessment per requested file, in request order
    ///
    /// # Errors
    /// Fails with `MotError::NoModelSet` when no file was requested, and
    /// on the first catalog or model file that cannot be loaded
    pub fn execute(&self, request: EvaluationRequest) -> Result<EvaluationResponse> {
        if request.model_files.is_empty() {
            return Err(MotError::NoModelSet.into());
        }

        // Step 1: Load catalogs
        self.progress_reporter.report("📚 Loading component and license catalogs...");
        let catalogs = self.catalog_reader.load_catalogs()?;
        tracing::info!(
            components = catalogs.components.len(),
            licenses = catalogs.licenses.len(),
            "Catalogs loaded"
        );
        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) and {} license(s)",
            catalogs.components.len(),
            catalogs.licenses.len()
        ));

        // Step 2: Read and import model files
        let models = self.read_models(&request.model_files, &catalogs.components)?;

        // Step 3: Evaluate
        self.progress_reporter
            .report(&format!("🔍 Evaluating {} model(s)...", models.len()));
        let assessments = evaluate_in_parallel(models, &catalogs.components, &catalogs.licenses);

        let evaluated: Vec<EvaluatedModel> = request
            .model_files
            .into_iter()
            .zip(assessments)
            .map(|(source, assessment)| EvaluatedModel { source, assessment })
            .collect();

        for model in &evaluated {
            tracing::info!(
                model = model.assessment.model().name(),
                classification = model.assessment.classification().value(),
                "Model evaluated"
            );
        }

        // Step 4: Metadata and response
        let metadata = RunMetadataGenerator::generate_default();
        let response = EvaluationResponse::new(
            evaluated,
            catalogs.components,
            metadata,
            request.threshold,
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Evaluated {} model(s)",
            response.models.len()
        ));
        Ok(response)
    }

    fn read_models(&self, files: &[PathBuf], components: &ComponentCatalog) -> Result<Vec<Model>> {
        let importer = ModelImporter::new(components);
        let total = files.len();
        let mut models = Vec::with_capacity(total);

        for (idx, path) in files.iter().enumerate() {
            let label = path.display().to_string();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&label));

            let model = self
                .model_reader
                .read_model(path)
                .and_then(|file| Ok(importer.import_file(file)?))
                .with_context(|| format!("Failed to load model file {}", path.display()));

            match model {
                Ok(model) => {
                    tracing::debug!(path = %path.display(), model = model.name(), "Model file loaded");
                    models.push(model);
                }
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Could not load {}", path.display()));
                    return Err(e);
                }
            }
        }

        Ok(models)
    }
}

/// Evaluates the models on the rayon pool; results keep the input order.
fn evaluate_in_parallel(
    models: Vec<Model>,
    components: &ComponentCatalog,
    licenses: &LicenseCatalog,
) -> Vec<ModelAssessment> {
    let evaluator = ModelEvaluator::new(components, licenses);
    models
        .into_par_iter()
        .map(|model| evaluator.assess(model))
        .collect()
}
