pub mod bfhl;
pub mod health;

use crate::error::AppError;

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
