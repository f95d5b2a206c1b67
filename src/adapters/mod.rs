/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// catalog sources, model files, report formatters and the console.
pub mod outbound;
