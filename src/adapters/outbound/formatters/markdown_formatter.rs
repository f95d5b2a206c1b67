use crate::application::read_models::{ComponentRowView, EvaluationReadModel, ModelEvaluationView};
use crate::evaluation::domain::OpennessClass;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for component rows
const TABLE_HEADER: &str = "| Component | Class | Required | Status | License |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|-------|----------|--------|---------|\n";

/// MarkdownFormatter adapter for human-readable evaluation reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn status_icon(status: Option<&str>) -> &'static str {
        match status {
            Some("included") => "✅",
            Some("optional") => "➕",
            Some("invalid") => "⛔",
            Some("unlicensed") => "⚠️",
            _ => "❌",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &EvaluationReadModel) {
        output.push_str("# Model Openness Evaluation\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {} (run `{}`).\n\n",
            model.metadata.tool, model.metadata.version, model.metadata.timestamp, model.metadata.run_id
        ));

        if let Some(threshold) = model.threshold {
            if model.below_threshold.is_empty() {
                output.push_str(&format!(
                    "All models meet the required class {}.\n\n",
                    threshold
                ));
            } else {
                output.push_str(&format!(
                    "**{} model(s) below the required class {}:** {}\n\n",
                    model.below_threshold.len(),
                    threshold,
                    model.below_threshold.join(", ")
                ));
            }
        }
    }

    fn render_model(&self, output: &mut String, model: &ModelEvaluationView) {
        match &model.version {
            Some(version) => output.push_str(&format!("## {} ({})\n\n", model.name, version)),
            None => output.push_str(&format!("## {}\n\n", model.name)),
        }

        if let Some(organization) = &model.organization {
            output.push_str(&format!("- **Organization:** {}\n", organization));
        }
        output.push_str(&format!("- **Source:** `{}`\n", model.source));
        output.push_str(&format!(
            "- **Classification:** {}\n",
            model.classification.label
        ));
        output.push_str(&format!(
            "- **Total progress:** {:.0}%\n\n",
            model.total_progress
        ));

        self.render_badges(output, model);
        self.render_progress(output, model);
        self.render_components(output, &model.components);
        self.render_messages(output, &model.messages);
    }

    fn render_badges(&self, output: &mut String, model: &ModelEvaluationView) {
        if model.badges.is_empty() {
            return;
        }
        let badges: Vec<String> = model
            .badges
            .iter()
            .map(|badge| format!("`{}: {}`", badge.label(), badge.status().text()))
            .collect();
        output.push_str(&badges.join(" "));
        output.push_str("\n\n");
    }

    fn render_progress(&self, output: &mut String, model: &ModelEvaluationView) {
        output.push_str("### Progress\n\n");
        output.push_str("| Class | Progress |\n");
        output.push_str("|-------|----------|\n");
        for class in OpennessClass::DESCENDING {
            output.push_str(&format!(
                "| {} | {:.0}% |\n",
                class.label(),
                model.progress_for(class.number())
            ));
        }
        output.push('\n');
    }

    fn render_components(&self, output: &mut String, components: &[ComponentRowView]) {
        output.push_str("### Components\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for component in components {
            let status = component.status.as_deref();
            output.push_str(&format!(
                "| {} | {} | {} | {} {} | {} |\n",
                Self::escape_markdown_table_cell(&component.name),
                component.class,
                if component.required { "yes" } else { "no" },
                Self::status_icon(status),
                status.unwrap_or("not evaluated"),
                Self::escape_markdown_table_cell(component.license.as_deref().unwrap_or("N/A"))
            ));
        }
        output.push('\n');
    }

    /// Renders the conditional-pass warnings; the first message is the header.
    fn render_messages(&self, output: &mut String, messages: &[String]) {
        let Some((header, items)) = messages.split_first() else {
            return;
        };
        output.push_str(&format!("> ⚠️ {}\n", header));
        for item in items {
            output.push_str(&format!("> - {}\n", item));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &EvaluationReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        for evaluated in &model.models {
            self.render_model(&mut output, evaluated);
        }

        Ok(output)
    }
}
