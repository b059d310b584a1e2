//! Strength-tier manager selection.
//!
//! The manager roster is ordered weakest-first and partitioned into five
//! contiguous tiers. A team's avg_ca picks the tier; its ordinal index
//! cycles through the tier's slice so consecutive same-tier teams do not
//! pile onto one manager.

use crate::models::{Manager, DEFAULT_MANAGER_ID};

/// Number of contiguous tiers the pool is partitioned into
pub const TIER_COUNT: usize = 5;

/// Map avg_ca to a tier in 0..=4 (0 = basic, 4 = elite)
pub fn ca_tier(avg_ca: f32) -> usize {
    if avg_ca >= 140.0 {
        4
    } else if avg_ca >= 120.0 {
        3
    } else if avg_ca >= 100.0 {
        2
    } else if avg_ca >= 80.0 {
        1
    } else {
        0
    }
}

/// Select a manager id for a team by strength tier.
///
/// Empty pools degrade to [`DEFAULT_MANAGER_ID`]. For pools smaller than
/// [`TIER_COUNT`] the top tiers collapse onto the last manager: the slice
/// start is clamped into the pool so the returned id always resolves to a
/// real pool member.
pub fn select_manager(avg_ca: f32, pool: &[Manager], index: usize) -> u32 {
    if pool.is_empty() {
        return DEFAULT_MANAGER_ID;
    }

    let tier = ca_tier(avg_ca);
    let tier_size = (pool.len() / TIER_COUNT).max(1);
    let tier_start = (tier * tier_size).min(pool.len() - 1);
    let tier_end = (tier_start + tier_size).min(pool.len());
    let slice_len = (tier_end - tier_start).max(1);

    pool[tier_start + index % slice_len].id
}
