use crate::evaluation::domain::{ComponentId, ComponentStatus, EvaluationReport, OpennessClass};

/// ResearchPaperSubstitution policy: a research paper may stand in for the
/// technical report.
///
/// The substitution holds when the technical report is not included at
/// Class III and the research paper was evaluated (included, invalid or
/// unlicensed) at Class I.
pub struct ResearchPaperSubstitution;

const TECHNICAL_REPORT: ComponentId = ComponentId::TECHNICAL_REPORT;
const RESEARCH_PAPER: ComponentId = ComponentId::RESEARCH_PAPER;

impl ResearchPaperSubstitution {
    pub fn applies(report: &EvaluationReport) -> bool {
        let report_included = report
            .class(OpennessClass::Three)
            .components
            .included
            .contains(&TECHNICAL_REPORT);
        !report_included && Self::paper_status(report).is_some()
    }

    /// Waives the technical report and mirrors the research paper's Class I
    /// outcome into Classes II and III.
    ///
    /// Returns true when the report was changed.
    pub fn apply(report: &mut EvaluationReport) -> bool {
        if !Self::applies(report) {
            return false;
        }
        let Some(status) = Self::paper_status(report) else {
            return false;
        };
        let license = report
            .license_of(OpennessClass::One, RESEARCH_PAPER)
            .cloned();

        for class in OpennessClass::DESCENDING {
            report
                .class_mut(class)
                .components
                .remove(ComponentStatus::Missing, TECHNICAL_REPORT);
        }

        for class in [OpennessClass::Two, OpennessClass::Three] {
            let evaluation = report.class_mut(class);
            if evaluation.components.status_of(RESEARCH_PAPER).is_some() {
                continue;
            }
            evaluation.components.bucket_mut(status).push(RESEARCH_PAPER);
            if let Some(license) = &license {
                evaluation.licenses.insert(RESEARCH_PAPER, license.clone());
            }
        }

        tracing::debug!(status = %status, "Research paper substitutes for the technical report");
        true
    }

    /// Number of required components waived from the Class I denominator.
    pub fn progress_adjustment(report: &EvaluationReport, class: OpennessClass) -> usize {
        if class != OpennessClass::One {
            return 0;
        }
        let included = &report.class(OpennessClass::One).components.included;
        if !included.contains(&TECHNICAL_REPORT) && included.contains(&RESEARCH_PAPER) {
            1
        } else {
            0
        }
    }

    fn paper_status(report: &EvaluationReport) -> Option<ComponentStatus> {
        match report.status_of(OpennessClass::One, RESEARCH_PAPER) {
            Some(
                status @ (ComponentStatus::Included
                | ComponentStatus::Invalid
                | ComponentStatus::Unlicensed),
            ) => Some(status),
            _ => None,
        }
    }
}
