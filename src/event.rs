//! Read-only view of the MIDI event being processed
//!
//! The routing pipeline owns and mutates its event records; this crate only
//! reads fields through the [`EventView`] trait, so a pipeline can expose
//! its own event type without copying. [`MidiEvent`] is a plain value type
//! for callers that don't have one.

/// Read-only accessors for the four addressable fields of a MIDI event.
///
/// `data1` and `data2` are the two data bytes of the message, e.g. note
/// number and velocity for a note event, or controller number and value
/// for a control change.
pub trait EventView {
    /// Input port the event arrived on
    fn port(&self) -> i32;
    /// MIDI channel (0-15)
    fn channel(&self) -> i32;
    /// First data byte
    fn data1(&self) -> i32;
    /// Second data byte
    fn data2(&self) -> i32;
}

/// A single MIDI event flowing through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MidiEvent {
    pub port: i32,
    pub channel: i32,
    pub data1: i32,
    pub data2: i32,
}

impl MidiEvent {
    /// Create an event from its four fields.
    pub fn new(port: i32, channel: i32, data1: i32, data2: i32) -> Self {
        Self {
            port,
            channel,
            data1,
            data2,
        }
    }
}

impl EventView for MidiEvent {
    fn port(&self) -> i32 {
        self.port
    }

    fn channel(&self) -> i32 {
        self.channel
    }

    fn data1(&self) -> i32 {
        self.data1
    }

    fn data2(&self) -> i32 {
        self.data2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_fields() {
        let ev = MidiEvent::new(2, 9, 36, 100);

        assert_eq!(ev.port(), 2);
        assert_eq!(ev.channel(), 9);
        assert_eq!(ev.data1(), 36);
        assert_eq!(ev.data2(), 100);
    }

    #[test]
    fn test_default_is_zeroed() {
        let ev = MidiEvent::default();

        assert_eq!(ev, MidiEvent::new(0, 0, 0, 0));
    }
}
