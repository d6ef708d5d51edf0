#![no_std]

pub mod buffer;
pub mod cancel;
pub mod color;
pub mod effect;
pub mod engine;
pub mod layout;
pub mod transmitter;

pub use buffer::PixelBuffer;
pub use cancel::CancelToken;
pub use color::{Rgb, heat_to_color, scale_color, wire_word};
pub use effect::{Effect, FireConfig, FireEffect, PaletteSweep, TurnIndicator};
pub use engine::EffectRunner;
pub use layout::{PlayerLayout, PlayerSpan};
pub use transmitter::{FRAME_SETTLE, Transmitter, WORD_ALIGN_BITS};

pub use embassy_time::{Duration, Instant};

use core::fmt;

/// Abstract LED strip transmit primitive
///
/// Implement this trait to support different waveform generators
/// (PIO, RMT, SPI tricks). The renderer is generic over this trait
/// and only ever hands it fully packed, brightness-scaled words.
pub trait StripDriver {
    /// Emit one frame as a single atomic burst.
    ///
    /// `words` carry 24 data bits each (green-red-blue, MSB first);
    /// `bit_width` is the left-alignment shift the peripheral applies
    /// before clocking bits out (see [`transmitter::WORD_ALIGN_BITS`]).
    fn transmit(&mut self, words: &[u32], bit_width: u8) -> Result<(), TransmitError>;
}

/// Opaque failure reported by a [`StripDriver`].
///
/// Never retried; the current effect invocation aborts and the error
/// propagates to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitError(pub &'static str);

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hardware transmit failed: {}", self.0)
    }
}

/// Rejected tunables, reported at effect start before any frame is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Spark chance outside [0, 1]
    SparkChance(f32),
    /// Cooldown factor outside [0, 1]
    Cooldown(f32),
    /// Heat floor above heat ceiling
    HeatBounds { min: u8, max: u8 },
    /// Strip length of zero
    EmptyStrip,
    /// Player count of zero
    NoPlayers,
    /// Player count above the layout capacity
    TooManyPlayers { requested: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SparkChance(value) => {
                write!(f, "spark chance {value} outside [0, 1]")
            }
            Self::Cooldown(value) => {
                write!(f, "cooldown factor {value} outside [0, 1]")
            }
            Self::HeatBounds { min, max } => {
                write!(f, "heat floor {min} above heat ceiling {max}")
            }
            Self::EmptyStrip => write!(f, "strip length must be positive"),
            Self::NoPlayers => write!(f, "player count must be positive"),
            Self::TooManyPlayers { requested, capacity } => {
                write!(f, "{requested} players exceed layout capacity {capacity}")
            }
        }
    }
}

/// Errors surfaced by the rendering core.
///
/// All variants are fatal to the current effect invocation; the caller
/// may restart with corrected configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Pixel or player index outside the valid range
    IndexOutOfRange { index: usize, len: usize },
    /// Rejected tunables at effect start
    Config(ConfigError),
    /// Pass-through failure from the transmit primitive
    Transmit(TransmitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Config(err) => write!(f, "{err}"),
            Self::Transmit(err) => write!(f, "{err}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TransmitError> for Error {
    fn from(err: TransmitError) -> Self {
        Self::Transmit(err)
    }
}
