//! Effect orchestration
//!
//! The runner owns the pixel buffer and the transmitter, borrows a
//! cancellation token, and drives effects: looping effects run step by
//! step until cancelled, one-shot effects render a single frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::cancel::CancelToken;
use crate::effect::{Effect, FireConfig, FireEffect, TurnIndicator};
use crate::layout::PlayerLayout;
use crate::transmitter::Transmitter;
use crate::{Error, StripDriver};

/// Lifecycle of one looping invocation.
///
/// `Stopped` is terminal: it is entered the instant cancellation is
/// observed at the top of a step and the invocation never leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Stopped,
}

/// Drives effects against a strip of `N` pixels.
pub struct EffectRunner<'a, D: StripDriver, const N: usize> {
    buffer: PixelBuffer<N>,
    transmitter: Transmitter<D, N>,
    cancel: &'a CancelToken,
}

impl<'a, D: StripDriver, const N: usize> EffectRunner<'a, D, N> {
    /// Build a runner around a transmit driver.
    ///
    /// Brightness is clamped into [0.0, 1.0] and applied at frame
    /// time. The token is borrowed so timer callbacks can share it.
    pub fn new(driver: D, brightness: f32, cancel: &'a CancelToken) -> Self {
        Self {
            buffer: PixelBuffer::new(brightness),
            transmitter: Transmitter::new(driver),
            cancel,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.buffer
    }

    /// Run a looping effect until cancellation.
    ///
    /// The token is polled at the top of every step, never mid-step,
    /// so a request takes effect within one step's latency and an
    /// in-flight frame always completes. The token is reset on every
    /// exit path, which makes the runner immediately re-invocable.
    ///
    /// Returns the number of frames transmitted.
    pub fn run<E: Effect>(&mut self, mut effect: E) -> Result<u32, Error> {
        let mut state = RunState::Running;
        let mut frames: u32 = 0;

        let result = loop {
            if self.cancel.is_requested() {
                state = RunState::Stopped;
            }
            if state == RunState::Stopped {
                break Ok(frames);
            }

            effect.render(self.buffer.pixels_mut());
            if let Err(err) = self.transmitter.render_frame(&self.buffer) {
                break Err(Error::Transmit(err));
            }
            frames += 1;
        };

        self.cancel.reset();

        #[cfg(feature = "esp32-log")]
        println!("effect loop stopped after {} frames", frames);

        result
    }

    /// Validate the fire config, then run the fire effect.
    ///
    /// The heat field lives only for this invocation; the same seed
    /// reproduces the same run.
    pub fn run_fire(&mut self, config: FireConfig, seed: u64) -> Result<u32, Error> {
        let fire = FireEffect::<N>::new(config, seed)?;
        self.run(fire)
    }

    /// Render a single frame of a one-shot effect.
    pub fn show<E: Effect>(&mut self, mut effect: E) -> Result<(), Error> {
        effect.render(self.buffer.pixels_mut());
        self.transmitter.render_frame(&self.buffer)?;
        Ok(())
    }

    /// Light one player's section of the strip.
    pub fn show_player<const MAX_PLAYERS: usize>(
        &mut self,
        layout: &PlayerLayout<MAX_PLAYERS>,
        player: usize,
    ) -> Result<(), Error> {
        let indicator = TurnIndicator::new(layout, player)?;
        self.show(indicator)
    }

    /// Tear the runner down, returning the driver.
    pub fn into_driver(self) -> D {
        self.transmitter.into_driver()
    }
}
