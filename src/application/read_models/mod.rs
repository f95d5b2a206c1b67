//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of evaluation results for formatters.

pub mod component_view;
pub mod evaluation_read_model;
pub mod evaluation_read_model_builder;

pub use component_view::ComponentRowView;
pub use evaluation_read_model::{
    ClassificationView, EvaluationReadModel, ModelEvaluationView, RunMetadataView,
};
pub use evaluation_read_model_builder::EvaluationReadModelBuilder;
