//! Error types for the construction and configuration layer.
//!
//! Intersection itself never fails: a miss is reported as `false`. These
//! errors come from validating constructors and settings.

use thiserror::Error;

/// Errors that can occur while building rays, shapes or settings.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Ray direction is zero-length or not finite.
    #[error("ray direction must be finite and non-zero")]
    DegenerateDirection,

    /// Shape parameters describe an empty or non-finite solid.
    #[error("degenerate shape: {0}")]
    DegenerateShape(String),

    /// Settings values are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings text is not valid TOML for [`TraceSettings`](crate::TraceSettings).
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
}

/// Result type for construction and configuration.
pub type Result<T> = std::result::Result<T, TraceError>;
