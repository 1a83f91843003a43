//! Parameter resolution against the current event
//!
//! A configured parameter is either a literal constant or a reference to a
//! field of the event being processed, so a unit like "transpose by the
//! value of data2" can be expressed without a scripting callback. The raw
//! wire form packs both into one integer: values >= 0 are literals,
//! -1..-4 name the four event fields. Decoding happens once at
//! configuration time; resolution per event is a total function.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::event::EventView;

/// A configured parameter: a literal constant or a live event field.
///
/// Serializes in the raw packed form (literal value, or field sentinel
/// -1..-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ParamRef {
    /// A constant, always non-negative
    Literal(i32),
    /// The event's input port
    Port,
    /// The event's channel
    Channel,
    /// The event's first data byte
    Data1,
    /// The event's second data byte
    Data2,
}

impl ParamRef {
    /// Decode the raw packed form. Negative values other than the four
    /// field sentinels are configuration errors.
    pub fn from_raw(raw: i32) -> Result<Self, ConfigError> {
        match raw {
            n if n >= 0 => Ok(ParamRef::Literal(n)),
            -1 => Ok(ParamRef::Port),
            -2 => Ok(ParamRef::Channel),
            -3 => Ok(ParamRef::Data1),
            -4 => Ok(ParamRef::Data2),
            other => Err(ConfigError::InvalidParameter(other)),
        }
    }

    /// Encode back to the raw packed form.
    pub fn to_raw(self) -> i32 {
        match self {
            ParamRef::Literal(n) => n,
            ParamRef::Port => -1,
            ParamRef::Channel => -2,
            ParamRef::Data1 => -3,
            ParamRef::Data2 => -4,
        }
    }
}

impl TryFrom<i32> for ParamRef {
    type Error = ConfigError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<ParamRef> for i32 {
    fn from(param: ParamRef) -> i32 {
        param.to_raw()
    }
}

/// Resolve a parameter against the event currently being processed.
pub fn get_parameter(param: ParamRef, ev: &impl EventView) -> i32 {
    match param {
        ParamRef::Literal(n) => n,
        ParamRef::Port => ev.port(),
        ParamRef::Channel => ev.channel(),
        ParamRef::Data1 => ev.data1(),
        ParamRef::Data2 => ev.data2(),
    }
}
