//! Automatic gain control for raw band samples
//!
//! Fast-attack/slow-decay ceiling tracking, applied separately to each band:
//! a loud transient raises the band's running max at once, while quiet passages
//! lower it by a fixed step per cycle until it reaches the initial floor.

use crate::band::{BAND_COUNT, MAX_SAMPLE};

/// Default per-band noise floors, lowest band first
pub const DEFAULT_NOISE_FLOOR: [u16; BAND_COUNT] = [90, 90, 90, 100, 100, 110, 120];

/// Lowest value a running max can decay to
pub const DEFAULT_INITIAL_MAX: u16 = 200;

/// Amount subtracted from every running max each cycle
pub const DEFAULT_DECAY: u16 = 2;

/// Configuration for the gain control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgcConfig {
    /// Fixed noise value subtracted from each band sample
    pub noise_floor: [u16; BAND_COUNT],
    /// Running max floor (and start value)
    pub initial_max: u16,
    /// Decay applied to the running max on every cycle
    pub decay: u16,
}

impl Default for AgcConfig {
    fn default() -> Self {
        Self {
            noise_floor: DEFAULT_NOISE_FLOOR,
            initial_max: DEFAULT_INITIAL_MAX,
            decay: DEFAULT_DECAY,
        }
    }
}

/// Normalizer output for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLevels {
    /// Noise-adjusted samples
    pub samples: [u16; BAND_COUNT],
    /// Running max of every band, never below the configured floor
    pub maxima: [u16; BAND_COUNT],
}

/// Per-band gain control state
#[derive(Debug, Clone)]
pub struct Agc {
    config: AgcConfig,
    levels: BandLevels,
}

impl Agc {
    pub const fn new(config: &AgcConfig) -> Self {
        Self {
            config: *config,
            levels: BandLevels {
                samples: [0; BAND_COUNT],
                maxima: [config.initial_max; BAND_COUNT],
            },
        }
    }

    /// Normalize one set of raw samples
    ///
    /// Per band: decay the running max down to the floor, subtract the
    /// noise floor from the sample, then raise the max to the sample if it
    /// is louder. Samples above [`MAX_SAMPLE`] are clamped first.
    pub fn process(&mut self, raw: &[u16; BAND_COUNT]) -> &BandLevels {
        let floor = self.config.initial_max;
        for (band, &sample) in raw.iter().enumerate() {
            let decayed = self.levels.maxima[band]
                .saturating_sub(self.config.decay)
                .max(floor);
            let adjusted = sample
                .min(MAX_SAMPLE)
                .saturating_sub(self.config.noise_floor[band]);

            self.levels.samples[band] = adjusted;
            self.levels.maxima[band] = decayed.max(adjusted);
        }
        &self.levels
    }

    /// Output of the last processed cycle
    pub const fn levels(&self) -> &BandLevels {
        &self.levels
    }

    pub const fn config(&self) -> &AgcConfig {
        &self.config
    }

    /// Drop all tracked maxima back to the floor
    pub fn reset(&mut self) {
        self.levels = BandLevels {
            samples: [0; BAND_COUNT],
            maxima: [self.config.initial_max; BAND_COUNT],
        };
    }
}
