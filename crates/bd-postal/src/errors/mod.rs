//! Centralized error handling for the postal query service
//!
//! A single error enum covers all application layers. The web layer maps
//! variants to HTTP status codes in `web::responses`; dataset errors are
//! fatal at startup and never reach a request handler.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
