//! Midimap - real-time MIDI event attribute transformation
//!
//! Pure per-event primitives for an event-processing pipeline: velocity
//! remapping through parameterized curves, linear range mapping between
//! numeric domains, and resolution of parameters that reference fields of
//! the event being processed. Everything here runs on the audio/MIDI
//! thread, so no function allocates, blocks, or fails; invalid
//! configuration is rejected when the raw tags are decoded, never per
//! event.
//!
//! ```
//! use midimap::{apply_velocity, get_parameter, MidiEvent, ParamRef, VelocityMode};
//!
//! let ev = MidiEvent::new(0, 0, 60, 100);
//! let boost = get_parameter(ParamRef::Literal(10), &ev);
//! assert_eq!(apply_velocity(ev.data2, boost as f32, VelocityMode::Offset), 110);
//! ```

pub mod error;
pub mod event;
pub mod param;
pub mod range;
pub mod velocity;

pub use error::ConfigError;
pub use event::{EventView, MidiEvent};
pub use param::{get_parameter, ParamRef};
pub use range::{map_range, Numeric};
pub use velocity::{apply_velocity, VelocityMode};
