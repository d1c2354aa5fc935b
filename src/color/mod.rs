pub mod palette;

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Max channel intensity of the strip's native 7-bit resolution
pub const MAX_CHANNEL: u8 = 127;

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create a color, clamping every channel to [`MAX_CHANNEL`]
pub const fn rgb7(r: u8, g: u8, b: u8) -> Rgb {
    Rgb {
        r: clamp7(r),
        g: clamp7(g),
        b: clamp7(b),
    }
}

const fn clamp7(value: u8) -> u8 {
    if value > MAX_CHANNEL { MAX_CHANNEL } else { value }
}

/// Blend from `background` towards `foreground` by `active / len`
///
/// Channels are interpolated independently with integer math. The result is
/// exactly `background` at `active == 0` and exactly `foreground` at
/// `active == len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn modulate(background: Rgb, foreground: Rgb, active: u16, len: u16) -> Rgb {
    if len == 0 {
        return foreground;
    }
    let active = i32::from(active.min(len));
    let len = i32::from(len);
    let channel = |from: u8, to: u8| -> u8 {
        let from = i32::from(from);
        (from + (i32::from(to) - from) * active / len) as u8
    };

    Rgb {
        r: channel(background.r, foreground.r),
        g: channel(background.g, foreground.g),
        b: channel(background.b, foreground.b),
    }
}

/// Expand a 7-bit color to the 0..=255 range of 8-bit drivers
pub const fn to_full_scale(color: Rgb) -> Rgb {
    Rgb {
        r: expand7(color.r),
        g: expand7(color.g),
        b: expand7(color.b),
    }
}

const fn expand7(value: u8) -> u8 {
    let value = clamp7(value);
    (value << 1) | (value >> 6)
}
