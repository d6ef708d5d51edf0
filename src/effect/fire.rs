//! Fire simulation effect
//!
//! A 1-D cellular automaton over a per-cell heat field: heat diffuses
//! to neighbors on the circular strip, random spark sites inject new
//! heat, and a global cooldown pulls everything back down. Each step
//! maps the heat field through the flame palette into the frame.

use super::Effect;
use crate::ConfigError;
use crate::color::{Rgb, heat_to_color};

/// Default likelihood threshold for sparking (1.0 = never sparks).
const DEFAULT_SPARK_CHANCE: f32 = 0.99;
/// Default per-step heat retention factor.
const DEFAULT_COOLDOWN: f32 = 0.98;
/// Default heat floor after cooldown.
const DEFAULT_MIN_HEAT: u8 = 20;
/// Default heat ceiling after cooldown.
const DEFAULT_MAX_HEAT: u8 = 200;

/// Diffused heat below this level makes a spark site ignite.
const IGNITION_THRESHOLD: u8 = 128;

/// Tunables for the fire simulation.
///
/// Validated once at effect construction; a rejected config never
/// renders a frame.
#[derive(Debug, Clone, Copy)]
pub struct FireConfig {
    /// Per-cell draw threshold: a cell sparks when a uniform draw
    /// exceeds this, so 0.99 ignites roughly 1% of cells per step.
    pub spark_chance: f32,
    /// Heat multiplier applied after diffusion, in [0, 1].
    pub cooldown: f32,
    /// Lower clamp on each cell's heat.
    pub min_heat: u8,
    /// Upper clamp on each cell's heat.
    pub max_heat: u8,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            spark_chance: DEFAULT_SPARK_CHANCE,
            cooldown: DEFAULT_COOLDOWN,
            min_heat: DEFAULT_MIN_HEAT,
            max_heat: DEFAULT_MAX_HEAT,
        }
    }
}

impl FireConfig {
    /// Reject out-of-range tunables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spark_chance) {
            return Err(ConfigError::SparkChance(self.spark_chance));
        }
        if !(0.0..=1.0).contains(&self.cooldown) {
            return Err(ConfigError::Cooldown(self.cooldown));
        }
        if self.min_heat > self.max_heat {
            return Err(ConfigError::HeatBounds {
                min: self.min_heat,
                max: self.max_heat,
            });
        }
        Ok(())
    }
}

/// Apply the cooldown factor and clamp the result.
///
/// Truncating multiply, then the ceiling clamp, then the floor clamp —
/// in that order. With `min_heat <= max_heat` the order is invisible,
/// but it is part of the effect's numeric fidelity and kept as is.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cool_and_clamp(heat: u8, cooldown: f32, min_heat: u8, max_heat: u8) -> u8 {
    let cooled = (f32::from(heat) * cooldown) as u8;
    cooled.min(max_heat).max(min_heat)
}

/// SplitMix64 stream for spark and seed draws.
///
/// Good enough statistics for visual noise with no dependency cost;
/// deterministic per seed so effect runs are reproducible.
#[derive(Debug, Clone)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform f32 in [0, 1).
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn next_unit(&mut self) -> f32 {
        ((self.next_u64() >> 40) as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform u8 in the inclusive range [lo, hi].
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn range_inclusive(&mut self, lo: u8, hi: u8) -> u8 {
        debug_assert!(lo <= hi);
        let span = u64::from(hi - lo) + 1;
        lo + (self.next_u64() % span) as u8
    }
}

/// Looping fire effect over a strip of `N` pixels.
///
/// The heat field is double buffered: each step reads the current
/// field and writes the next, then swaps, so neighbor diffusion never
/// observes half-updated cells.
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize> {
    config: FireConfig,
    heat: [u8; N],
    next: [u8; N],
    sparks: [bool; N],
    rng: SplitMix64,
}

impl<const N: usize> FireEffect<N> {
    /// Validate the config and seed the initial heat field.
    ///
    /// Every cell starts at a uniform-random heat in [0, 255]. The
    /// same seed reproduces the same run exactly.
    pub fn new(config: FireConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SplitMix64::new(seed);
        let mut heat = [0u8; N];
        for cell in &mut heat {
            *cell = rng.range_inclusive(0, 255);
        }

        Ok(Self {
            config,
            heat,
            next: [0; N],
            sparks: [false; N],
            rng,
        })
    }

    /// Replace the seeded heat field with a known one.
    ///
    /// Useful for deterministic starts.
    #[must_use]
    pub fn with_heat(mut self, heat: [u8; N]) -> Self {
        self.heat = heat;
        self
    }

    /// Current heat field, one value per pixel.
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Weighted average of a cell and its four nearest neighbors on
    /// the circular index space: weights 3 for self, 2 for +-1, 1 for
    /// +-2, floor-divided by their sum.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn diffused(&self, i: usize) -> u8 {
        let prev1 = u16::from(self.heat[(i + N - 1) % N]);
        let prev2 = u16::from(self.heat[(i + N - 2) % N]);
        let next1 = u16::from(self.heat[(i + 1) % N]);
        let next2 = u16::from(self.heat[(i + 2) % N]);
        let own = u16::from(self.heat[i]);

        ((own * 3 + prev1 * 2 + prev2 + next1 * 2 + next2) / 9) as u8
    }
}

impl<const N: usize> Effect for FireEffect<N> {
    fn render(&mut self, leds: &mut [Rgb]) {
        if N == 0 {
            return;
        }

        // Spark sites for the whole step are drawn up front, keeping
        // the draw order independent of the cell scan.
        for spark in &mut self.sparks {
            *spark = self.rng.next_unit() > self.config.spark_chance;
        }

        for i in 0..N {
            let mut heat = self.diffused(i);

            if self.sparks[i] && heat < IGNITION_THRESHOLD {
                heat += self.rng.range_inclusive(IGNITION_THRESHOLD, 255 - heat);
            }

            heat = cool_and_clamp(
                heat,
                self.config.cooldown,
                self.config.min_heat,
                self.config.max_heat,
            );

            self.next[i] = heat;
            if let Some(led) = leds.get_mut(i) {
                *led = heat_to_color(heat);
            }
        }

        core::mem::swap(&mut self.heat, &mut self.next);
    }
}
