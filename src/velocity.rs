//! Velocity remapping through parameterized curve shapes
//!
//! Runs on the real-time MIDI thread: every branch is bounded, nothing
//! allocates, and the mode dispatch is an exhaustive match with no
//! fallback.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Curve shape for velocity remapping, selected at configuration time.
///
/// Serializes by its numeric tag (1-5) so patch files that store modes
/// by value stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum VelocityMode {
    /// Add a constant offset to the velocity
    Offset,
    /// Scale the velocity by a constant factor
    Multiply,
    /// Replace the velocity with a constant
    Fixed,
    /// Power curve: `(v/127)^(1/value) * 127`
    Gamma,
    /// Exponential response curve, steepness controlled by `value`
    Curve,
}

impl VelocityMode {
    /// Decode a raw configuration tag.
    pub fn from_tag(tag: i32) -> Result<Self, ConfigError> {
        match tag {
            1 => Ok(VelocityMode::Offset),
            2 => Ok(VelocityMode::Multiply),
            3 => Ok(VelocityMode::Fixed),
            4 => Ok(VelocityMode::Gamma),
            5 => Ok(VelocityMode::Curve),
            other => Err(ConfigError::UnknownVelocityMode(other)),
        }
    }

    /// The stable numeric tag used by external configuration.
    pub fn tag(self) -> i32 {
        match self {
            VelocityMode::Offset => 1,
            VelocityMode::Multiply => 2,
            VelocityMode::Fixed => 3,
            VelocityMode::Gamma => 4,
            VelocityMode::Curve => 5,
        }
    }
}

impl TryFrom<i32> for VelocityMode {
    type Error = ConfigError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl From<VelocityMode> for i32 {
    fn from(mode: VelocityMode) -> i32 {
        mode.tag()
    }
}

/// Remap a velocity through the given curve mode.
///
/// A zero input velocity always returns 0, whatever the mode: a note-off
/// (or zero-velocity note-on) must never become a sounding note. Gamma and
/// curve floor their result at 1 for the same reason in the other
/// direction.
///
/// Offset, multiply and fixed truncate toward zero; gamma and curve round
/// to nearest. The asymmetry matches the tuning of the original loudness
/// curves and is intentional.
///
/// Offset may leave the 0-127 range; clamping is the caller's job.
pub fn apply_velocity(velocity: i32, value: f32, mode: VelocityMode) -> i32 {
    if velocity == 0 {
        return 0;
    }

    match mode {
        VelocityMode::Offset => velocity + value as i32,

        VelocityMode::Multiply => (velocity as f32 * value) as i32,

        VelocityMode::Fixed => value as i32,

        VelocityMode::Gamma => {
            if velocity > 0 {
                let a = velocity as f32 / 127.0;
                let b = a.powf(1.0 / value);
                ((b * 127.0).round() as i32).max(1)
            } else {
                velocity
            }
        }

        VelocityMode::Curve => {
            if velocity > 0 {
                if value != 0.0 {
                    let p = -value;
                    let a = (p * velocity as f32 / 127.0).exp() - 1.0;
                    let b = p.exp() - 1.0;
                    ((127.0 * a / b).round() as i32).max(1)
                } else {
                    // closed form divides by zero at value == 0
                    velocity
                }
            } else {
                0
            }
        }
    }
}
