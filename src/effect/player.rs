//! Player turn indicator
//!
//! One-shot overlay: the requested player's span lights up in the
//! highlight color, everything else goes black. No looping and no
//! cancellation interaction.

use super::Effect;
use crate::Error;
use crate::color::{BLACK, RED, Rgb};
use crate::layout::{PlayerLayout, PlayerSpan};

/// Highlights one player's section of the strip.
#[derive(Debug, Clone, Copy)]
pub struct TurnIndicator {
    span: PlayerSpan,
    color: Rgb,
}

impl TurnIndicator {
    /// Look up the player's span in the layout.
    ///
    /// Fails when the player index is outside the layout, before any
    /// pixel is touched.
    pub fn new<const MAX_PLAYERS: usize>(
        layout: &PlayerLayout<MAX_PLAYERS>,
        player: usize,
    ) -> Result<Self, Error> {
        let span = layout.span(player).ok_or(Error::IndexOutOfRange {
            index: player,
            len: layout.player_count(),
        })?;
        Ok(Self { span, color: RED })
    }

    /// Override the highlight color.
    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Inclusive pixel range this indicator lights.
    pub const fn span(&self) -> PlayerSpan {
        self.span
    }
}

impl Effect for TurnIndicator {
    fn render(&mut self, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if self.span.contains(i) {
                self.color
            } else {
                BLACK
            };
        }
    }
}
