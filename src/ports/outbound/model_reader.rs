use crate::evaluation::services::ModelFile;
use crate::shared::Result;
use std::path::Path;

/// ModelReader port for reading model files
pub trait ModelReader {
    /// Reads and parses one model file
    ///
    /// # Arguments
    /// * `path` - Path to a YAML or JSON model file
    ///
    /// # Returns
    /// Either a release document or declared model data
    ///
    /// # Errors
    /// Returns an error if the file cannot be read safely or does not parse
    fn read_model(&self, path: &Path) -> Result<ModelFile>;
}
