use crate::evaluation::domain::RunMetadata;
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "mot-eval";

/// RunMetadataGenerator service stamping evaluation runs
pub struct RunMetadataGenerator;

impl RunMetadataGenerator {
    pub fn generate(tool_name: &str, tool_version: &str) -> RunMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        RunMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Metadata for this binary, using the compile-time package version.
    pub fn generate_default() -> RunMetadata {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
