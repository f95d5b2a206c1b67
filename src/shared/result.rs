/// Type alias for Result with anyhow::Error as the error type.
/// Every layer returns this so errors can carry context across adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
