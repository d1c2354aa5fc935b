//! Band to segment mapping
//!
//! Every defined segment gets a level in `0..=MAX_LEVEL`: the sum of its
//! selected band samples scaled against the sum of the same bands' running
//! maxima.

use crate::agc::BandLevels;
use crate::band::BandMask;
use crate::segment::MAX_LEVEL;
use crate::store::SegmentStore;

/// Level of a band selection, with the divisor used
///
/// An empty selection yields level 0 with a divisor of 1.
#[allow(clippy::cast_possible_truncation)]
pub fn band_level(levels: &BandLevels, bands: BandMask) -> (u16, u32) {
    let mut sample_total: u32 = 0;
    let mut max_total: u32 = 0;
    for band in bands.bands() {
        sample_total += u32::from(levels.samples[band.index()]);
        max_total += u32::from(levels.maxima[band.index()]);
    }
    let max_total = max_total.max(1);
    let level = (sample_total * u32::from(MAX_LEVEL) / max_total).min(u32::from(MAX_LEVEL));

    (level as u16, max_total)
}

/// Compute the level of every defined segment, including ones with no action
///
/// Hooks are not called here. Run them after all levels are in place so each
/// hook sees levels of the same cycle.
pub fn map_levels<const N: usize>(levels: &BandLevels, store: &mut SegmentStore<'_, N>) {
    for segment in store.slots_mut().iter_mut().flatten() {
        let (level, max_total) = band_level(levels, segment.bands());
        segment.set_mapped(level, max_total);
    }
}
