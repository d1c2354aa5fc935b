//! Output driver for `smart-leds` strip drivers
//!
//! Frames are rendered at the strip's 7-bit intensity. Drivers speaking the
//! `smart-leds` interface expect 8-bit channels, so colors are expanded on
//! the way out.

use core::iter::repeat_n;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::OutputDriver;
use crate::color::{OFF, Rgb, to_full_scale};

/// Adapts any [`SmartLedsWrite`] driver to [`OutputDriver`]
///
/// Write errors are dropped: a lost frame is replaced by the next one.
pub struct SmartLedsOutput<W> {
    writer: W,
    led_count: usize,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wrap a driver for a strip of `led_count` LEDs
    pub const fn new(writer: W, led_count: usize) -> Self {
        Self { writer, led_count }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let result = self
            .writer
            .write(colors.iter().map(|color| to_full_scale(*color)));
        report_failure(result.is_err(), "write");
    }

    fn clear(&mut self) {
        let result = self.writer.write(repeat_n(OFF, self.led_count));
        report_failure(result.is_err(), "clear");
    }
}

#[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
fn report_failure(failed: bool, operation: &str) {
    #[cfg(feature = "esp32-log")]
    if failed {
        println!("[SmartLedsOutput.{}] strip write failed", operation);
    }
}
