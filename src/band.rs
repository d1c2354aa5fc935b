//! Spectrum bands
//!
//! The analyzer splits audio into seven fixed bands. Segments select any
//! combination of them through a [`BandMask`].

use core::ops::BitOr;

/// Number of bands delivered by the spectrum analyzer
pub const BAND_COUNT: usize = 7;

/// Max raw amplitude of a single band sample
pub const MAX_SAMPLE: u16 = 1023;

/// One of the seven analyzer bands, lowest frequency first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Band {
    /// 63 Hz, mostly rumble and noise
    Hz63 = 0,
    Hz160 = 1,
    Hz400 = 2,
    Hz1k = 3,
    Hz2k5 = 4,
    Hz6k25 = 5,
    /// 16 kHz, mostly noise energy
    Hz16k = 6,
}

impl Band {
    /// All bands in sample order
    pub const ALL: [Band; BAND_COUNT] = [
        Self::Hz63,
        Self::Hz160,
        Self::Hz400,
        Self::Hz1k,
        Self::Hz2k5,
        Self::Hz6k25,
        Self::Hz16k,
    ];

    /// Position of the band in a sample array
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn center_frequency_hz(self) -> u32 {
        match self {
            Self::Hz63 => 63,
            Self::Hz160 => 160,
            Self::Hz400 => 400,
            Self::Hz1k => 1_000,
            Self::Hz2k5 => 2_500,
            Self::Hz6k25 => 6_250,
            Self::Hz16k => 16_000,
        }
    }

    /// Mask selecting only this band
    pub const fn mask(self) -> BandMask {
        BandMask(1 << self as u8)
    }
}

/// Set of bands aggregated into a segment level
///
/// An empty mask is valid: such a segment always has level 0, which is
/// what static or decorative segments want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandMask(u8);

impl BandMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0x7F);

    /// Build a mask from raw bits, ignoring bits above band 7
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Build a mask from a signed raw value
    ///
    /// Any negative value (typically `-1`) selects all bands.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: i16) -> Self {
        if raw < 0 {
            return Self::ALL;
        }
        Self::from_bits((raw & 0x7F) as u8)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, band: Band) -> bool {
        self.0 & band.mask().0 != 0
    }

    /// Iterate selected bands in sample order
    pub fn bands(self) -> impl Iterator<Item = Band> {
        Band::ALL.into_iter().filter(move |band| self.contains(*band))
    }
}

impl BitOr for BandMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr for Band {
    type Output = BandMask;

    fn bitor(self, rhs: Self) -> BandMask {
        self.mask() | rhs.mask()
    }
}

impl BitOr<Band> for BandMask {
    type Output = Self;

    fn bitor(self, rhs: Band) -> Self {
        self | rhs.mask()
    }
}

impl From<Band> for BandMask {
    fn from(band: Band) -> Self {
        band.mask()
    }
}

/// Which analyzer channels a sample is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channels {
    Left,
    Right,
    /// Average of both channels
    #[default]
    Both,
}

impl Channels {
    /// Combine per-channel readings the way the selector asks for
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn mix(self, left: u16, right: u16) -> u16 {
        match self {
            Self::Left => left,
            Self::Right => right,
            Self::Both => ((left as u32 + right as u32) >> 1) as u16,
        }
    }
}
