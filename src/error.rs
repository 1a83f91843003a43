//! Configuration error types
//!
//! All errors in this crate happen at configuration time, when raw numeric
//! tags from a patch file or binding layer are decoded into the closed
//! types in [`crate::velocity`] and [`crate::param`]. The per-event
//! functions themselves are total and never fail.

use thiserror::Error;

/// Error decoding a raw configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Velocity mode tag outside the known range 1-5.
    #[error("unknown velocity mode tag {0} (expected 1-5)")]
    UnknownVelocityMode(i32),

    /// Negative parameter value that is not one of the field sentinels.
    #[error("invalid parameter value {0} (expected a non-negative literal or a field sentinel -1..-4)")]
    InvalidParameter(i32),
}
