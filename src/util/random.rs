//! Injectable randomness for placement and growth.
//!
//! Every random draw in the crate goes through [`RandomSource`], which yields
//! one unit float at a time. The shaped draws (ranges, integer counts, points
//! in a ball) are derived here from those unit values, so a scripted source
//! pins down every spawned transform and growth step exactly.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of uniformly distributed unit values.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Standard generator, seeded deterministically when `seed` is given and
    /// from the operating system otherwise.
    #[must_use]
    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Replays a fixed cycle of unit values.
///
/// Used by tests and by session replays that need byte-identical results.
/// An empty sequence yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Cycle through `values` in order.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniform float in `[min, max)`.
pub fn uniform<S: RandomSource + ?Sized>(rng: &mut S, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.next_unit()
}

/// Uniform integer in `[min, max]` (both inclusive).
pub fn int_inclusive<S: RandomSource + ?Sized>(
    rng: &mut S,
    min: u32,
    max: u32,
) -> u32 {
    if max <= min {
        return min;
    }
    let span = max - min;
    let step = (rng.next_unit() * (span + 1) as f32).floor() as u32;
    min + step.min(span)
}

/// Uniform point inside the ball of `radius` around `center`.
///
/// Consumes three unit values: azimuth, polar cosine, radial fraction.
pub fn point_in_sphere<S: RandomSource + ?Sized>(
    rng: &mut S,
    center: Vec3,
    radius: f32,
) -> Vec3 {
    let theta = TAU * rng.next_unit();
    let cos_phi = 2.0 * rng.next_unit() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    let r = radius * rng.next_unit().cbrt();
    center
        + Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin()) * r
}

/// Round `value` to `decimals` fractional digits.
#[must_use]
pub fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = 10f32.powi(decimals as i32);
    (value * factor).round() / factor
}
