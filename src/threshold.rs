//! Random thresholds for the sparkle action
//!
//! Every LED position of a `RandomThreshold` segment maps to one of 64 fixed
//! thresholds. The LED is lit while the segment level is at or above its
//! threshold, so density follows the level while the pattern stays put until
//! the table is redrawn.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::segment::MAX_LEVEL;

/// Number of distinct thresholds, positions wrap around
pub const THRESHOLD_COUNT: usize = 64;

#[derive(Debug, Clone)]
pub struct ThresholdTable {
    rng: SmallRng,
    thresholds: [u16; THRESHOLD_COUNT],
}

impl ThresholdTable {
    pub fn new(seed: u64) -> Self {
        let mut table = Self {
            rng: SmallRng::seed_from_u64(seed),
            thresholds: [0; THRESHOLD_COUNT],
        };
        table.reshuffle();
        table
    }

    /// Restart the generator from `seed` and redraw the table
    ///
    /// Equal seeds give equal tables.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        self.reshuffle();
    }

    /// Redraw the table from the running generator
    pub fn reshuffle(&mut self) {
        for threshold in &mut self.thresholds {
            *threshold = self.rng.random_range(0..MAX_LEVEL);
        }
    }

    /// Threshold of the `step`-th LED of a segment
    pub const fn threshold(&self, step: u16) -> u16 {
        self.thresholds[step as usize % THRESHOLD_COUNT]
    }

    pub const fn thresholds(&self) -> &[u16; THRESHOLD_COUNT] {
        &self.thresholds
    }
}
