//! # FX Error Types
//!
//! Everything that can go wrong in the reveal / particle core. None of these
//! are fatal to the page: callers degrade to "no animation".

use thiserror::Error;

/// Errors produced by the animation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// The drawing surface could not provide a 2D context.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The viewport observation primitive is missing or threw.
    #[error("visibility observer unavailable: {0}")]
    ObserverUnavailable(String),

    /// Reveal threshold outside `(0, 1]`.
    #[error("invalid reveal threshold {0}: must be in (0, 1]")]
    InvalidThreshold(f32),

    /// Colour string that is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid colour {0:?}: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// Configuration parsed but failed validation, or did not parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O error text.
        reason: String,
    },

    /// The frame driver worker could not be started.
    #[error("frame driver failed to start: {0}")]
    DriverSpawn(String),
}

/// Result type for animation core operations.
pub type FxResult<T> = Result<T, FxError>;
