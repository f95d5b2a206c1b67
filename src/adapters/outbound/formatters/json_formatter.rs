use crate::application::read_models::EvaluationReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter for machine-readable evaluation reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &EvaluationReadModel) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(model).context("Failed to serialize evaluation report")?;
        json.push('\n');
        Ok(json)
    }
}
