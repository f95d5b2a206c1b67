use crate::evaluation::domain::OpennessClass;
use std::path::PathBuf;

/// EvaluationRequest - Input of the batch evaluation use case
#[derive(Debug, Clone, Default)]
pub struct EvaluationRequest {
    /// Model files to evaluate, reported in this order
    pub model_files: Vec<PathBuf>,
    /// Class every model must reach; `None` disables the check
    pub threshold: Option<OpennessClass>,
}

impl EvaluationRequest {
    pub fn new(model_files: Vec<PathBuf>, threshold: Option<OpennessClass>) -> Self {
        Self {
            model_files,
            threshold,
        }
    }
}
