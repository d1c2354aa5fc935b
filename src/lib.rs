#![no_std]

pub mod action;
pub mod agc;
pub mod band;
pub mod color;
pub mod error;
pub mod frame_scheduler;
pub mod hook;
pub mod mapper;
pub mod organ;
pub mod output;
pub mod renderer;
pub mod segment;
pub mod store;
pub mod threshold;
pub mod traversal;

pub use action::Action;
pub use agc::{Agc, AgcConfig, BandLevels};
pub use band::{BAND_COUNT, Band, BandMask, Channels};
pub use error::ConfigError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use hook::{SegmentAccess, SegmentHook};
pub use organ::{LightOrgan, LightOrganConfig};
pub use output::SmartLedsOutput;
pub use renderer::Renderer;
pub use segment::{MAX_LEVEL, Segment, SegmentId, SegmentOptions, SegmentUpdate};
pub use store::{DEFAULT_MAX_SEGMENTS, SegmentStore};

pub use color::{OFF, Rgb, rgb7};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Turn every LED off. Called once at startup and after a reset.
    fn clear(&mut self);
}

/// Spectrum analyzer trait
///
/// Implement this trait over the analyzer peripheral. Strobing and analog
/// reads stay behind it.
pub trait SpectrumSource {
    /// Read one amplitude (0..=1023) per band, lowest band first
    fn read(&mut self, channels: Channels) -> [u16; BAND_COUNT];
}
