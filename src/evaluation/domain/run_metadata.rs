/// Metadata stamped on every evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl RunMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, run_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    /// RFC 3339 timestamp of the run.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// `urn:uuid:` identifier unique to the run.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}
