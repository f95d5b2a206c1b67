use super::assessment::ModelAssessment;
use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
use crate::evaluation::domain::content_type;
use crate::evaluation::domain::{
    Classification, Component, ComponentId, ComponentStatus, EvaluationReport, LicenseSelection,
    Model, OpennessClass,
};
use crate::evaluation::policies::{LicenseResolution, ResearchPaperSubstitution};

/// Header of the conditional-pass warning list.
pub const CONDITIONAL_HEADER: &str =
    "The following components have an open license but should have a type-appropriate open license:";

/// ModelEvaluator service scoring a model against the openness classes
///
/// The evaluator only borrows the catalogs; every method is a pure function
/// of its arguments, so one evaluator can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct ModelEvaluator<'a> {
    components: &'a ComponentCatalog,
    licenses: &'a LicenseCatalog,
}

impl<'a> ModelEvaluator<'a> {
    pub fn new(components: &'a ComponentCatalog, licenses: &'a LicenseCatalog) -> Self {
        Self {
            components,
            licenses,
        }
    }

    /// Evaluates a model against all three classes.
    ///
    /// Requirements accumulate from Class III down to Class I: a component
    /// required at Class III is also required at Classes II and I.
    pub fn evaluate(&self, model: &Model) -> EvaluationReport {
        let mut report = EvaluationReport::new();
        let mut required: Vec<ComponentId> = Vec::new();
        let mut optional: Vec<ComponentId> = Vec::new();

        for unknown in model
            .components()
            .iter()
            .filter(|id| self.components.get(**id).is_none())
        {
            tracing::debug!(component = %unknown, model = model.name(), "Ignoring component missing from catalog");
        }

        for class in OpennessClass::DESCENDING {
            required.extend(self.components.required(class));
            optional.extend(self.components.optional(class));

            for id in &required {
                self.evaluate_component(model, *id, class, true, &mut report);
            }
            for id in &optional {
                self.evaluate_component(model, *id, class, false, &mut report);
            }
        }

        ResearchPaperSubstitution::apply(&mut report);
        report
    }

    fn evaluate_component(
        &self,
        model: &Model,
        id: ComponentId,
        class: OpennessClass,
        required: bool,
        report: &mut EvaluationReport,
    ) {
        let Some(component) = self.components.get(id) else {
            return;
        };

        if !model.includes(id) {
            if required {
                report.class_mut(class).components.missing.push(id);
            }
            return;
        }

        let license = self.resolve_license(component, model);
        let status = match license.license_id() {
            Some(license_id) if self.licenses.is_open_source_license(license_id) => {
                if !self.licenses.is_type_appropriate(license_id, component) {
                    report.flag_not_type_appropriate(id);
                }
                if required {
                    ComponentStatus::Included
                } else {
                    ComponentStatus::Optional
                }
            }
            _ if license == LicenseSelection::Unlicensed => ComponentStatus::Unlicensed,
            _ => ComponentStatus::Invalid,
        };

        tracing::debug!(
            component = %id,
            class = %class,
            license = %license,
            status = %status,
            "Evaluated component"
        );
        report.class_mut(class).record(id, status, license);
    }

    pub fn resolve_license(&self, component: &Component, model: &Model) -> LicenseSelection {
        LicenseResolution::resolve(component, model.license_data())
    }

    /// Percentage of `class` requirements met, in `0.0..=100.0`.
    ///
    /// Progress is zero when a less strict class is not fully met.
    pub fn progress(&self, report: &EvaluationReport, class: OpennessClass) -> f64 {
        let mut total = 0usize;
        let mut included = 0usize;

        for current in class.down_to() {
            total += self.components.required(current).len();
            included = report.class(current).components.included.len();
            if included < total && current != class {
                return 0.0;
            }
        }

        let total = total.saturating_sub(ResearchPaperSubstitution::progress_adjustment(report, class));
        if total == 0 {
            return 0.0;
        }

        (included as f64 / total as f64 * 100.0).min(100.0)
    }

    /// The strictest class whose progress is exactly 100.
    pub fn classification(&self, report: &EvaluationReport) -> Classification {
        OpennessClass::DESCENDING
            .into_iter()
            .filter(|class| self.progress(report, *class) == 100.0)
            .last()
            .map_or(Classification::Unclassified, Classification::Qualified)
    }

    /// Unweighted average of the three class progress values.
    pub fn total_progress(&self, report: &EvaluationReport) -> f64 {
        let sum: f64 = OpennessClass::DESCENDING
            .into_iter()
            .map(|class| self.progress(report, class))
            .sum();
        sum / 3.0
    }

    /// Warning lines for components with an open but not type-appropriate license.
    pub fn conditional_messages(&self, report: &EvaluationReport) -> Vec<String> {
        if report.not_type_appropriate().is_empty() {
            return Vec::new();
        }

        let mut messages = vec![CONDITIONAL_HEADER.to_string()];
        messages.extend(report.not_type_appropriate().iter().filter_map(|id| {
            self.components.get(*id).map(|c| {
                format!(
                    "{} of type {}",
                    c.name(),
                    content_type::join(c.content_types())
                )
            })
        }));
        messages
    }

    /// Evaluates the model and derives every metric from the same report.
    pub fn assess(&self, model: Model) -> ModelAssessment {
        let report = self.evaluate(&model);
        let progress = OpennessClass::DESCENDING.map(|class| (class, self.progress(&report, class)));
        let classification = self.classification(&report);
        let total_progress = self.total_progress(&report);
        let messages = self.conditional_messages(&report);

        tracing::debug!(
            model = model.name(),
            classification = classification.value(),
            total_progress,
            "Assessed model"
        );

        ModelAssessment::new(model, report, progress, classification, total_progress, messages)
    }
}
