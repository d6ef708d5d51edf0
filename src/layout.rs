//! Player position geometry
//!
//! A one-time layout step: the strip is divided into contiguous,
//! equal-width bins, one per player, and each bin's lit span is shrunk
//! by a configured padding so neighboring players stay visually
//! separated.

use heapless::Vec;

use crate::ConfigError;

/// Inclusive index range lit for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpan {
    pub start: usize,
    pub end: usize,
}

impl PlayerSpan {
    /// Whether the pixel index falls inside the lit range.
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Configured light width (end offset relative to start).
    pub const fn width(self) -> usize {
        self.end - self.start
    }
}

/// Precomputed (start, end) spans for every player.
///
/// `MAX_PLAYERS` bounds the table capacity; the actual player count is
/// a runtime input. Bins are `strip_length / player_count` pixels wide
/// (floor division); any remainder pixels at the top of the strip stay
/// dark. A padding at least as wide as a bin degenerates the lit span
/// to zero width, which is valid and lights a single pixel per the
/// inclusive-range contract.
#[derive(Debug, Clone)]
pub struct PlayerLayout<const MAX_PLAYERS: usize> {
    spans: Vec<PlayerSpan, MAX_PLAYERS>,
}

impl<const MAX_PLAYERS: usize> PlayerLayout<MAX_PLAYERS> {
    /// Compute the layout from the strip geometry.
    pub fn new(
        strip_length: usize,
        player_count: usize,
        padding: usize,
    ) -> Result<Self, ConfigError> {
        if strip_length == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                requested: player_count,
                capacity: MAX_PLAYERS,
            });
        }

        let bin_width = strip_length / player_count;
        let light_width = if padding > bin_width {
            0
        } else {
            bin_width - padding
        };

        let mut spans = Vec::new();
        for player in 0..player_count {
            let offset = bin_width * player;
            let start = offset + padding;
            // Capacity checked above, push cannot fail.
            let _ = spans.push(PlayerSpan {
                start,
                end: start + light_width,
            });
        }

        Ok(Self { spans })
    }

    /// Lit span for one player, `None` for an out-of-range index.
    pub fn span(&self, player: usize) -> Option<PlayerSpan> {
        self.spans.get(player).copied()
    }

    /// Number of players in the layout.
    pub fn player_count(&self) -> usize {
        self.spans.len()
    }

    pub fn spans(&self) -> &[PlayerSpan] {
        &self.spans
    }
}
