//! Bounded per-team perturbation of the style preset.
//!
//! One signed delta per team, reused across all six parameters, so the
//! whole vector shifts together instead of scattering.

use crate::models::TacticsVector;

const DELTA_PRIME: i64 = 31;
const DELTA_STEPS: i64 = 20;

/// Signed delta in [-0.10, +0.09] derived from the team index
pub fn variation_delta(index: usize) -> f32 {
    ((index as i64 * DELTA_PRIME) % DELTA_STEPS - 10) as f32 / 100.0
}

/// Perturb a base vector by the team's delta, clamping to [0, 1]
pub fn apply_variation(base: TacticsVector, index: usize) -> TacticsVector {
    base.shifted(variation_delta(index))
}
