#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::action::Action;
use crate::agc::{Agc, AgcConfig, BandLevels};
use crate::band::{BAND_COUNT, BandMask};
use crate::color::Rgb;
use crate::error::ConfigError;
use crate::mapper::map_levels;
use crate::renderer::Renderer;
use crate::segment::SegmentId;
use crate::store::SegmentStore;

/// Default strip length, 5 meters at 32 LEDs per meter
pub const DEFAULT_LED_COUNT: usize = 160;

/// Configuration for the light organ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightOrganConfig {
    /// Number of LEDs on the strip, at most the frame capacity
    pub led_count: usize,
    pub agc: AgcConfig,
    /// Seed of the random threshold table
    pub random_seed: u64,
}

impl Default for LightOrganConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            agc: AgcConfig::default(),
            random_seed: 0,
        }
    }
}

/// Light organ - turns band samples into LED frames
///
/// `MAX_LEDS` is the frame capacity, `MAX_SEGMENTS` the segment capacity.
/// A cycle runs to completion synchronously; pacing is up to the caller.
pub struct LightOrgan<'h, const MAX_LEDS: usize, const MAX_SEGMENTS: usize> {
    agc: Agc,
    segments: SegmentStore<'h, MAX_SEGMENTS>,
    renderer: Renderer<MAX_LEDS>,
}

impl<'h, const MAX_LEDS: usize, const MAX_SEGMENTS: usize> LightOrgan<'h, MAX_LEDS, MAX_SEGMENTS> {
    pub fn new(config: &LightOrganConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            agc: Agc::new(&config.agc),
            segments: SegmentStore::new(),
            renderer: Renderer::new(config.led_count, config.random_seed)?,
        })
    }

    /// Run one display cycle
    ///
    /// Normalizes the samples, maps them to segment levels, runs the segment
    /// hooks and renders the frame. Hook changes are dropped once the frame
    /// is rendered.
    pub fn cycle(&mut self, samples: &[u16; BAND_COUNT]) -> &[Rgb] {
        let levels = self.agc.process(samples);
        map_levels(levels, &mut self.segments);

        let committed = self.segments.snapshot();
        self.segments.run_hooks();
        self.renderer.render(&self.segments);
        self.segments.restore(committed);

        self.renderer.frame()
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        self.renderer.frame()
    }

    pub const fn led_count(&self) -> usize {
        self.renderer.led_count()
    }

    pub const fn segments(&self) -> &SegmentStore<'h, MAX_SEGMENTS> {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut SegmentStore<'h, MAX_SEGMENTS> {
        &mut self.segments
    }

    /// Define the next segment, see [`SegmentStore::define`]
    pub fn define_segment(
        &mut self,
        first_led: u16,
        led_count: u16,
        action: Action,
        foreground: Rgb,
        bands: BandMask,
    ) -> Result<SegmentId, ConfigError> {
        self.segments
            .define(first_led, led_count, action, foreground, bands)
    }

    /// Normalizer output of the last cycle
    pub const fn band_levels(&self) -> &BandLevels {
        self.agc.levels()
    }

    pub const fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    /// Clear all segments and redraw the random thresholds
    ///
    /// Gain control state is kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[LightOrgan.reset] clearing {} segments", self.segments.len());
        self.segments.reset();
        self.renderer.thresholds_mut().reshuffle();
    }

    /// Restart the random thresholds from a fixed seed
    pub fn reseed_random(&mut self, seed: u64) {
        #[cfg(feature = "esp32-log")]
        println!("[LightOrgan.reseed_random] seed {}", seed);
        self.renderer.thresholds_mut().reseed(seed);
    }

    /// Drop the tracked band maxima back to their floor
    pub fn reset_agc(&mut self) {
        self.agc.reset();
    }
}
