//! Frame scheduling and timing utilities.
//!
//! Provides portable cycle pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::band::Channels;
use crate::organ::LightOrgan;
use crate::{OutputDriver, SpectrumSource};

/// Default frame duration.
///
/// Faster refreshes make the display look frantic.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(30);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives the full display cycle.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Samples the spectrum source, runs the light organ and writes the output
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(organ, source, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<
    'h,
    S: SpectrumSource,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const MAX_SEGMENTS: usize,
> {
    organ: LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS>,
    source: S,
    output: O,
    channels: Channels,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'h, S: SpectrumSource, O: OutputDriver, const MAX_LEDS: usize, const MAX_SEGMENTS: usize>
    FrameScheduler<'h, S, O, MAX_LEDS, MAX_SEGMENTS>
{
    /// Create a new frame scheduler and clear the strip.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` for frame timing and averages both channels.
    pub fn new(organ: LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS>, source: S, output: O) -> Self {
        Self::with_frame_duration(organ, source, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        organ: LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS>,
        source: S,
        mut output: O,
        frame_duration: Duration,
    ) -> Self {
        output.clear();
        Self {
            organ,
            source,
            output,
            channels: Channels::Both,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Select the analyzer channels sampled on each tick.
    #[must_use]
    pub fn with_channels(mut self, channels: Channels) -> Self {
        self.channels = channels;
        self
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Samples the spectrum and renders the frame
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting frames
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let samples = self.source.read(self.channels);
        let frame = self.organ.cycle(&samples);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Reset the organ and clear the strip.
    pub fn reset(&mut self) {
        self.organ.reset();
        self.output.clear();
    }

    /// Get a reference to the light organ.
    pub fn organ(&self) -> &LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS> {
        &self.organ
    }

    /// Get a mutable reference to the light organ.
    pub fn organ_mut(&mut self) -> &mut LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS> {
        &mut self.organ
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the spectrum source.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
