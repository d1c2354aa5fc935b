//! Segment records
//!
//! A segment is a run of LEDs with its own action, colors and band selection.

use core::ops::BitOr;

use crate::action::Action;
use crate::band::BandMask;
use crate::color::{OFF, Rgb};

/// Max normalized segment level
pub const MAX_LEVEL: u16 = 1023;

/// Stable handle of a defined segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<SegmentId> for usize {
    fn from(id: SegmentId) -> Self {
        id.0
    }
}

/// Rendering options of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentOptions(u8);

impl SegmentOptions {
    /// Skip off pixels instead of writing them, so lower segments show through
    pub const SUPPRESS_BACKGROUND_OVERWRITE: Self = Self(0x01);
    /// Blend the foreground between background and foreground by level
    pub const MODULATE_COLOR: Self = Self(0x02);
    /// Use `MAX_LEVEL - level` for display
    pub const INVERT_LEVEL: Self = Self(0x04);

    const ALL_BITS: u8 = 0x07;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build options from raw bits, dropping unknown ones
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SegmentOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A configured region of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    first_led: u16,
    led_count: u16,
    action: Action,
    foreground: Rgb,
    background: Rgb,
    bands: BandMask,
    spacing: u16,
    options: SegmentOptions,
    level: u16,
    max_level: u32,
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(0, 0, Action::None, OFF, BandMask::NONE)
    }
}

impl Segment {
    /// Create a segment with the engine defaults for everything not given:
    /// background off, no spacing, no options.
    pub const fn new(
        first_led: u16,
        led_count: u16,
        action: Action,
        foreground: Rgb,
        bands: BandMask,
    ) -> Self {
        Self {
            first_led,
            led_count,
            action,
            foreground,
            background: OFF,
            bands,
            spacing: 0,
            options: SegmentOptions::empty(),
            level: 0,
            max_level: 1,
        }
    }

    pub const fn first_led(&self) -> u16 {
        self.first_led
    }

    pub const fn led_count(&self) -> u16 {
        self.led_count
    }

    pub const fn action(&self) -> Action {
        self.action
    }

    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub const fn bands(&self) -> BandMask {
        self.bands
    }

    /// Number of LEDs skipped after every addressed one
    pub const fn spacing(&self) -> u16 {
        self.spacing
    }

    pub const fn options(&self) -> SegmentOptions {
        self.options
    }

    /// Normalized level of the current cycle (0..=1023)
    pub const fn level(&self) -> u16 {
        self.level
    }

    /// Sum of running maxima of the selected bands, at least 1
    pub const fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn set_first_led(&mut self, first_led: u16) {
        self.first_led = first_led;
    }

    pub fn set_led_count(&mut self, led_count: u16) {
        self.led_count = led_count;
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    pub fn set_foreground(&mut self, color: Rgb) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    pub fn set_bands(&mut self, bands: BandMask) {
        self.bands = bands;
    }

    pub fn set_spacing(&mut self, spacing: u16) {
        self.spacing = spacing;
    }

    pub fn set_options(&mut self, options: SegmentOptions) {
        self.options = options;
    }

    /// Override the level for this cycle, clamped to [`MAX_LEVEL`]
    pub fn set_level(&mut self, level: u16) {
        self.level = level.min(MAX_LEVEL);
    }

    pub(crate) fn set_mapped(&mut self, level: u16, max_level: u32) {
        self.level = level.min(MAX_LEVEL);
        self.max_level = max_level;
    }
}

/// Partial update of segment properties
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentUpdate {
    pub first_led: Option<u16>,
    pub led_count: Option<u16>,
    pub action: Option<Action>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bands: Option<BandMask>,
    pub spacing: Option<u16>,
    pub options: Option<SegmentOptions>,
    pub level: Option<u16>,
}

impl SegmentUpdate {
    pub const fn new() -> Self {
        Self {
            first_led: None,
            led_count: None,
            action: None,
            foreground: None,
            background: None,
            bands: None,
            spacing: None,
            options: None,
            level: None,
        }
    }

    #[must_use]
    pub const fn first_led(mut self, first_led: u16) -> Self {
        self.first_led = Some(first_led);
        self
    }

    #[must_use]
    pub const fn led_count(mut self, led_count: u16) -> Self {
        self.led_count = Some(led_count);
        self
    }

    #[must_use]
    pub const fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub const fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub const fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn bands(mut self, bands: BandMask) -> Self {
        self.bands = Some(bands);
        self
    }

    #[must_use]
    pub const fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub const fn options(mut self, options: SegmentOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub const fn level(mut self, level: u16) -> Self {
        self.level = Some(level);
        self
    }

    /// Write all present fields into the segment
    pub fn apply(&self, segment: &mut Segment) {
        if let Some(first_led) = self.first_led {
            segment.set_first_led(first_led);
        }
        if let Some(led_count) = self.led_count {
            segment.set_led_count(led_count);
        }
        if let Some(action) = self.action {
            segment.set_action(action);
        }
        if let Some(color) = self.foreground {
            segment.set_foreground(color);
        }
        if let Some(color) = self.background {
            segment.set_background(color);
        }
        if let Some(bands) = self.bands {
            segment.set_bands(bands);
        }
        if let Some(spacing) = self.spacing {
            segment.set_spacing(spacing);
        }
        if let Some(options) = self.options {
            segment.set_options(options);
        }
        if let Some(level) = self.level {
            segment.set_level(level);
        }
    }
}
