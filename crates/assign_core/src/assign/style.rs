//! Deterministic tactical style sampling and formation rotation.
//!
//! Style selection is a weighted categorical draw with no RNG: the team's
//! ordinal index is hashed into a fraction of the unit interval and matched
//! against a cumulative weight table for the team's avg_ca band. Stronger
//! bands lean Attacking/Possession, weaker bands lean Defensive/Balanced.

use crate::models::{Formation, TacticalStyle, STYLE_ORDER};

/// Prime multiplier spreading consecutive indices across [0, 1) without
/// short-period cycling
const INDEX_PRIME: u64 = 7919;
const FRACTION_SCALE: u64 = 10_000;

/// Style weights per avg_ca band, ordered by descending lower bound.
/// Each row sums to 1.0 across [`STYLE_ORDER`]. The final catch-all band
/// keeps the linear scan total even if bands are added later.
static BAND_WEIGHTS: [(f32, [f32; 6]); 5] = [
    (140.0, [0.30, 0.05, 0.20, 0.25, 0.10, 0.10]),
    (120.0, [0.25, 0.10, 0.25, 0.20, 0.10, 0.10]),
    (100.0, [0.15, 0.15, 0.35, 0.15, 0.10, 0.10]),
    (80.0, [0.10, 0.20, 0.35, 0.10, 0.15, 0.10]),
    (f32::NEG_INFINITY, [0.05, 0.35, 0.35, 0.05, 0.15, 0.05]),
];

/// Weight row for an avg_ca value
pub fn band_weights(avg_ca: f32) -> &'static [f32; 6] {
    for (lower_bound, weights) in &BAND_WEIGHTS {
        if avg_ca >= *lower_bound {
            return weights;
        }
    }
    // NEG_INFINITY bound makes the scan total; NaN avg_ca cannot reach the
    // engine through the typed boundary
    &BAND_WEIGHTS[BAND_WEIGHTS.len() - 1].1
}

/// Deterministic pseudo-random fraction in [0, 1) derived from the team's
/// ordinal index only
pub fn index_fraction(index: usize) -> f32 {
    ((index as u64 * INDEX_PRIME) % FRACTION_SCALE) as f32 / FRACTION_SCALE as f32
}

/// Select a tactical style for a team from its strength band and index.
///
/// Walks [`STYLE_ORDER`] accumulating weights and returns the first style
/// whose cumulative weight reaches the index fraction. If floating-point
/// rounding leaves the cumulative sum just short of 1.0, falls back to
/// `Balanced` (safety default, never an error).
pub fn select_style(avg_ca: f32, index: usize) -> TacticalStyle {
    let weights = band_weights(avg_ca);
    let frac = index_fraction(index);

    let mut cumulative = 0.0f32;
    for (style, weight) in STYLE_ORDER.iter().zip(weights.iter()) {
        cumulative += weight;
        if frac <= cumulative {
            return *style;
        }
    }

    TacticalStyle::Balanced
}

/// Rotate through the style's 3 candidate formations by team index
pub fn select_formation(style: TacticalStyle, index: usize) -> Formation {
    let candidates = style.formation_candidates();
    candidates[index % candidates.len()]
}
