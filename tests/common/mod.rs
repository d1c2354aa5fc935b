#![allow(dead_code)]

use myrtio_light_organ::{AgcConfig, BAND_COUNT, Channels, OutputDriver, Rgb, SpectrumSource};

/// Gain control with no noise floor, so raw samples pass through untouched
pub(crate) const QUIET_AGC: AgcConfig = AgcConfig {
    noise_floor: [0; BAND_COUNT],
    initial_max: 200,
    decay: 2,
};

/// Spectrum source returning fixed samples
pub(crate) struct FixedSource {
    pub(crate) samples: [u16; BAND_COUNT],
    pub(crate) reads: usize,
    pub(crate) last_channels: Option<Channels>,
}

impl FixedSource {
    pub(crate) fn new(samples: [u16; BAND_COUNT]) -> Self {
        Self {
            samples,
            reads: 0,
            last_channels: None,
        }
    }
}

impl SpectrumSource for FixedSource {
    fn read(&mut self, channels: Channels) -> [u16; BAND_COUNT] {
        self.reads += 1;
        self.last_channels = Some(channels);
        self.samples
    }
}

/// Output driver recording every frame it receives
#[derive(Default)]
pub(crate) struct RecordingOutput {
    pub(crate) frames: Vec<Vec<Rgb>>,
    pub(crate) clears: usize,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

pub(crate) fn count_color(frame: &[Rgb], color: Rgb) -> usize {
    frame.iter().filter(|led| **led == color).count()
}

pub(crate) fn lit_positions(frame: &[Rgb], color: Rgb) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, led)| **led == color)
        .map(|(index, _)| index)
        .collect()
}
