use mot_eval::adapters::outbound::filesystem::parse_model_file;
use mot_eval::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ModelReader serving in-memory model file contents
#[derive(Default)]
pub struct MockModelReader {
    files: HashMap<PathBuf, String>,
}

impl MockModelReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers file contents; the extension picks JSON or YAML parsing.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl ModelReader for MockModelReader {
    fn read_model(&self, path: &Path) -> Result<ModelFile> {
        let Some(content) = self.files.get(path) else {
            anyhow::bail!("Mock model file not found: {}", path.display());
        };
        Ok(parse_model_file(path, content)?)
    }
}
