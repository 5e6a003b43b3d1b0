pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Zero total n-gram frequency: the frequency vector cannot be
/// normalized into a probability distribution.
pub fn degenerate_input_error() -> AppError {
    AppError::bad_request(String::from(
        "Degenerate input: total n-gram frequency is zero (empty corpus or every query shorter than the n-gram window)"
    ))
}

/// Pairwise similarity needs at least two queries
pub fn insufficient_data_error(found: usize) -> AppError {
    AppError::bad_request(format!(
        "Insufficient data: pairwise similarity requires at least 2 queries, got {}",
        found
    ))
}
