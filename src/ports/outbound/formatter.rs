use crate::application::read_models::EvaluationReadModel;
use crate::shared::Result;

/// ReportFormatter port turning evaluation results into text
pub trait ReportFormatter {
    /// Formats every evaluated model of a run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &EvaluationReadModel) -> Result<String>;
}
