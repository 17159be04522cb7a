//! Unified error handling for the digitizer.
//!
//! Two error families cover the crate:
//!
//! - [`ConfigError`]: malformed or unreadable configuration. Fatal at
//!   startup - no partial grid is ever constructed from a bad config.
//! - [`GeometryError`]: failures inside the geometry core. These abort only
//!   the current trace attempt; the grid's highlight state is left exactly
//!   as it was before the attempt.
//!
//! [`DigitizerError`] consolidates both for callers that cross the boundary,
//! and [`DigitizerResult`] is the crate-wide result alias.

mod config;
mod geometry;

pub use config::ConfigError;
pub use geometry::GeometryError;

use thiserror::Error;

/// Unified error type covering every failure the crate can produce.
#[derive(Debug, Error)]
pub enum DigitizerError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A geometry operation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result alias for operations that can fail with any digitizer error.
pub type DigitizerResult<T> = Result<T, DigitizerError>;

impl DigitizerError {
    /// True when the error only aborts the current trace attempt rather
    /// than the whole application.
    pub fn is_trace_local(&self) -> bool {
        matches!(self, DigitizerError::Geometry(_))
    }
}
