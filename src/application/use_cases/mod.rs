/// Use cases module containing application business logic orchestration
mod evaluate_models;

pub use evaluate_models::EvaluateModelsUseCase;
