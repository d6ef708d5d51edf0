//! Frame transmission and the wire timing contract
//!
//! Converts a [`PixelBuffer`] snapshot into a brightness-scaled, packed
//! word stream and pushes it to the [`StripDriver`] in one burst. The
//! per-bit timing constants live here because they are part of the
//! protocol contract even though the waveform generator itself is
//! external hardware.

use embassy_time::{Duration, block_for};

use crate::buffer::PixelBuffer;
use crate::color::{scale_color, wire_word};
use crate::{StripDriver, TransmitError};

/// Cycles the line is held high at the start of every bit slot.
pub const T1_CYCLES: u8 = 2;
/// Cycles that extend the high phase for a `1` bit, or the low phase
/// for a `0` bit.
pub const T2_CYCLES: u8 = 5;
/// Cycles the line is held low at the end of every bit slot.
pub const T3_CYCLES: u8 = 3;

/// Total cycles per bit slot. At the 8 MHz shift clock one slot is
/// 1.25 us: a `1` is high for 7 cycles then low for 3, a `0` is high
/// for 2 then low for 8. The driver must honor these bit-exactly.
pub const BIT_SLOT_CYCLES: u8 = T1_CYCLES + T2_CYCLES + T3_CYCLES;

/// Shift clock frequency the slot cycles are counted against.
pub const SHIFT_CLOCK_HZ: u32 = 8_000_000;

/// Left-alignment shift for each transmitted word.
///
/// Words carry 24 data bits; the peripheral shifts out MSB first after
/// discarding this many leading pad bits.
pub const WORD_ALIGN_BITS: u8 = 8;

/// Minimum gap after a transmitted frame before the next one.
///
/// The strip's receiving logic needs this reset/latch pause to take a
/// new frame; sending earlier corrupts the display. A hard protocol
/// requirement, not a pacing nicety.
pub const FRAME_SETTLE: Duration = Duration::from_millis(10);

/// Pushes pixel frames to the strip at the protocol timing.
///
/// Holds a reusable scratch array of packed words so frame rendering
/// allocates nothing.
pub struct Transmitter<D: StripDriver, const N: usize> {
    driver: D,
    words: [u32; N],
}

impl<D: StripDriver, const N: usize> Transmitter<D, N> {
    pub const fn new(driver: D) -> Self {
        Self { driver, words: [0; N] }
    }

    /// Transmit one frame and wait out the settle time.
    ///
    /// Every channel is scaled by the buffer's current brightness with
    /// truncating arithmetic, packed green-red-blue, and handed to the
    /// driver as a single atomic burst. A started burst always
    /// completes; cancellation only ever skips the next frame.
    ///
    /// Blocks for [`FRAME_SETTLE`] after the burst, so calling this
    /// back to back is always protocol safe.
    pub fn render_frame(&mut self, buffer: &PixelBuffer<N>) -> Result<(), TransmitError> {
        let brightness = buffer.brightness();
        for (word, pixel) in self.words.iter_mut().zip(buffer.pixels()) {
            *word = wire_word(scale_color(*pixel, brightness));
        }
        self.driver.transmit(&self.words, WORD_ALIGN_BITS)?;
        block_for(FRAME_SETTLE);
        Ok(())
    }

    /// Give the driver back, consuming the transmitter.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
