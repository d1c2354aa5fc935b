use crate::action::Action;
use crate::color::{OFF, Rgb, modulate};
use crate::error::ConfigError;
use crate::segment::{MAX_LEVEL, Segment, SegmentOptions};
use crate::store::SegmentStore;
use crate::threshold::ThresholdTable;
use crate::traversal::Traversal;

/// Convert a level to the number of lit LEDs in a segment of `len` LEDs
///
/// Monotonic in `level`, 0 at level 0 and `len` at [`MAX_LEVEL`].
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn active_led_count(level: u16, len: u16) -> u16 {
    let level = if level > MAX_LEVEL { MAX_LEVEL } else { level };
    let count = level as u32 * (len as u32 + 1) / (MAX_LEVEL as u32 + 1);
    if count > len as u32 { len } else { count as u16 }
}

/// Segment renderer - owns the frame buffer
///
/// Segments are drawn in index order into a buffer cleared to off on every
/// frame. Later segments overwrite earlier ones at the same LED.
pub struct Renderer<const MAX_LEDS: usize> {
    frame_buffer: [Rgb; MAX_LEDS],
    led_count: usize,
    thresholds: ThresholdTable,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer for a strip of `led_count` LEDs
    pub fn new(led_count: usize, seed: u64) -> Result<Self, ConfigError> {
        if led_count > MAX_LEDS {
            return Err(ConfigError::StripTooLong {
                led_count,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            frame_buffer: [OFF; MAX_LEDS],
            led_count,
            thresholds: ThresholdTable::new(seed),
        })
    }

    /// Render one frame from the current segment properties
    pub fn render<const N: usize>(&mut self, segments: &SegmentStore<'_, N>) -> &[Rgb] {
        let frame = &mut self.frame_buffer[..self.led_count];
        frame.fill(OFF);

        for (_, segment) in segments.iter() {
            if segment.action().is_rendered() {
                render_segment(frame, segment, &self.thresholds);
            }
        }

        frame
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count]
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    pub fn thresholds_mut(&mut self) -> &mut ThresholdTable {
        &mut self.thresholds
    }
}

fn render_segment(frame: &mut [Rgb], segment: &Segment, thresholds: &ThresholdTable) {
    let len = segment.led_count();
    if len == 0 {
        return;
    }
    let action = segment.action();
    let options = segment.options();

    let level = if options.contains(SegmentOptions::INVERT_LEVEL) {
        MAX_LEVEL.saturating_sub(segment.level())
    } else {
        segment.level()
    };
    let level_count = active_led_count(level, len);
    // Static and sparkle segments light every LED but still modulate by level
    let lit_count = if action.fills_completely() {
        len
    } else {
        level_count
    };

    let background = segment.background();
    let foreground = if options.contains(SegmentOptions::MODULATE_COLOR) {
        modulate(background, segment.foreground(), level_count, len)
    } else {
        segment.foreground()
    };
    let skip_off = options.contains(SegmentOptions::SUPPRESS_BACKGROUND_OVERWRITE);
    let sparkle = action == Action::RandomThreshold;

    for step in Traversal::new(action, segment.first_led(), len, segment.spacing()) {
        if !step.addressed {
            continue;
        }
        let color = if step.index < lit_count {
            foreground
        } else {
            background
        };
        if skip_off && color == OFF {
            continue;
        }
        if sparkle && thresholds.threshold(step.index) > level {
            continue;
        }

        // Segments may hang off the end of the strip
        let Ok(position) = usize::try_from(step.position) else {
            continue;
        };
        if let Some(led) = frame.get_mut(position) {
            *led = color;
        }
    }
}
