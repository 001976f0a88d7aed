/// Type alias for Result with [`ModelError`](crate::shared::ModelError) as the error type.
/// This provides a consistent error handling pattern across the codebase.
pub type Result<T> = std::result::Result<T, crate::shared::ModelError>;
