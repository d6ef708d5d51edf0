//! Palette sweep effect
//!
//! Sweeps the full flame palette along the strip, one phase unit per
//! frame. Mostly useful for eyeballing the heat-to-color ramp on real
//! hardware.

use super::Effect;
use crate::color::{Rgb, heat_to_color};

/// Looping sweep through the flame palette.
///
/// Each pixel shows `heat_to_color(i * 256 / len + phase)`, masked to
/// 8 bits, so the whole ramp is visible at once and scrolls as the
/// phase advances. The phase wraps, so the effect runs until
/// cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteSweep {
    phase: u8,
}

impl PaletteSweep {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Phase offset added to every pixel's palette position.
    pub const fn phase(self) -> u8 {
        self.phase
    }
}

impl Effect for PaletteSweep {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            let heat = (i * 256 / len + usize::from(self.phase)) & 0xFF;
            *led = heat_to_color(heat as u8);
        }
        self.phase = self.phase.wrapping_add(1);
    }
}
