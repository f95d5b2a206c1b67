mod assessment;
mod badge;
mod model_evaluator;
mod model_importer;
mod run_metadata_generator;

pub use assessment::ModelAssessment;
pub use badge::{Badge, BadgeGenerator, BadgeStatus};
pub use model_evaluator::{ModelEvaluator, CONDITIONAL_HEADER};
pub use model_importer::{ModelFile, ModelImporter};
pub use run_metadata_generator::{RunMetadataGenerator, TOOL_NAME};
