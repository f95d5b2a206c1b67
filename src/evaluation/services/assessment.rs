use crate::evaluation::domain::{Classification, EvaluationReport, Model, OpennessClass};

/// Everything derived from one evaluation of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAssessment {
    model: Model,
    report: EvaluationReport,
    progress: [(OpennessClass, f64); 3],
    classification: Classification,
    total_progress: f64,
    messages: Vec<String>,
}

impl ModelAssessment {
    pub fn new(
        model: Model,
        report: EvaluationReport,
        progress: [(OpennessClass, f64); 3],
        classification: Classification,
        total_progress: f64,
        messages: Vec<String>,
    ) -> Self {
        Self {
            model,
            report,
            progress,
            classification,
            total_progress,
            messages,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn report(&self) -> &EvaluationReport {
        &self.report
    }

    pub fn progress(&self, class: OpennessClass) -> f64 {
        self.progress
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(0.0, |(_, p)| *p)
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Label shown to users; pending models read "Pending evaluation"
    /// whatever their computed class.
    pub fn display_label(&self) -> &'static str {
        if self.is_pending() {
            Classification::PendingEvaluation.label()
        } else {
            self.classification.label()
        }
    }

    pub fn total_progress(&self) -> f64 {
        self.total_progress
    }

    /// Conditional-pass warnings, header line first. Empty when none apply.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.model.is_pending()
    }

    /// Class III met while some components carry an open license of the
    /// wrong content type.
    pub fn is_conditional_pass(&self) -> bool {
        self.progress(OpennessClass::Three) == 100.0
            && !self.report.not_type_appropriate().is_empty()
    }

    /// True when the model reached `threshold` or a stricter class.
    pub fn meets(&self, threshold: OpennessClass) -> bool {
        self.classification.meets(threshold)
    }
}
