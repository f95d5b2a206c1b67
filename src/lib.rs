//! mot-eval - Model Openness Framework evaluation tool
//!
//! This library classifies AI model releases into the three openness
//! classes of the Model Openness Framework, based on which components a
//! release includes and under which licenses. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`evaluation`): Catalogs, license resolution and the evaluator
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mot_eval::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let model_reader = FileSystemReader::new();
//! let catalog_reader = EmbeddedCatalogReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = EvaluateModelsUseCase::new(model_reader, catalog_reader, progress_reporter);
//!
//! // Execute
//! let request = EvaluationRequest::new(vec![PathBuf::from("pythia.yml")], None);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let read_model = EvaluationReadModelBuilder::build(&response, false);
//! let output = MarkdownFormatter::new().format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod evaluation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{EmbeddedCatalogReader, FileSystemCatalogReader};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        EvaluatedModel, EvaluationRequest, EvaluationResponse, OutputFormat,
    };
    pub use crate::application::read_models::{EvaluationReadModel, EvaluationReadModelBuilder};
    pub use crate::application::use_cases::EvaluateModelsUseCase;
    pub use crate::evaluation::catalog::{ComponentCatalog, LicenseCatalog};
    pub use crate::evaluation::domain::{
        Classification, Component, ComponentId, ComponentLicense, ComponentStatus, ContentType,
        EvaluationReport, GlobalLicense, License, LicenseSelection, Model, OpennessClass,
    };
    pub use crate::evaluation::services::{
        BadgeGenerator, ModelAssessment, ModelEvaluator, ModelFile, ModelImporter,
    };
    pub use crate::ports::outbound::{
        CatalogReader, Catalogs, ModelReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, MotError};
    pub use crate::shared::Result;
}
