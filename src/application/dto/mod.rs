/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and results out to the adapters,
/// keeping the evaluation domain isolated from both.
mod evaluation_request;
mod evaluation_response;
mod output_format;

pub use evaluation_request::EvaluationRequest;
pub use evaluation_response::{EvaluatedModel, EvaluationResponse};
pub use output_format::OutputFormat;
