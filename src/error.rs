use core::fmt;

use crate::segment::SegmentId;

/// Configuration errors
///
/// Returned instead of clamping, so a broken setup fails before any frame is
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// All segment slots are in use
    CapacityExceeded { capacity: usize },
    /// Segment index is past the store capacity
    IndexOutOfRange { index: usize, capacity: usize },
    /// Segment was never defined (or was cleared by a reset)
    UndefinedSegment(SegmentId),
    /// Strip is longer than the frame buffer
    StripTooLong { led_count: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "segment capacity of {} exceeded", capacity)
            }
            Self::IndexOutOfRange { index, capacity } => {
                write!(
                    f,
                    "segment index {} exceeds capacity of {}",
                    index, capacity
                )
            }
            Self::UndefinedSegment(id) => {
                write!(f, "segment {} is not defined", id.index())
            }
            Self::StripTooLong {
                led_count,
                capacity,
            } => {
                write!(
                    f,
                    "strip of {} LEDs exceeds frame capacity of {}",
                    led_count, capacity
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}
