//! Color types, the fire palette and wire-word packing
//!
//! One canonical RGB value type is used everywhere; the packed wire word
//! exists only transiently on the way to the transmit primitive.

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 150, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const PURPLE: Rgb = Rgb { r: 180, g: 0, b: 255 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Map a heat value to its flame color.
///
/// A 3-segment piecewise-linear approximation of blackbody color
/// temperature, not physically exact:
/// - below 85 the red channel ramps up from black,
/// - 85 to 169 shifts red towards yellow,
/// - 170 and above shifts yellow towards white.
///
/// The breakpoints and channel assignments are calibration constants;
/// changing them changes the look of every fire frame.
pub const fn heat_to_color(heat: u8) -> Rgb {
    if heat < 85 {
        Rgb {
            r: heat * 3,
            g: 0,
            b: 0,
        }
    } else if heat < 170 {
        Rgb {
            r: 255,
            g: heat - 85,
            b: 0,
        }
    } else {
        Rgb {
            r: 255,
            g: heat - 85,
            b: heat - 170,
        }
    }
}

/// Scale one channel by a brightness factor in [0.0, 1.0].
///
/// Truncates instead of rounding to match the strip's legacy visual
/// calibration: 1.0 reproduces the channel exactly, 0.0 is fully off.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(channel: u8, brightness: f32) -> u8 {
    (f32::from(channel) * brightness) as u8
}

/// Scale all three channels of a color by a brightness factor.
#[inline]
pub fn scale_color(color: Rgb, brightness: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

/// Pack a color into the 24-bit wire word.
///
/// The strip consumes channels in green-red-blue order, MSB first:
/// `(green << 16) | (red << 8) | blue`.
#[inline]
pub const fn wire_word(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | (color.b as u32)
}
