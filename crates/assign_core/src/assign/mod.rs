//! Assignment engine: turns raw stage-team records into fully specified
//! tactical identities.
//!
//! Pure transform over immutable inputs. Every field is derived from the
//! team's own record, its ordinal index, and the read-only manager pool;
//! no RNG, no clock, no shared state. Same inputs always produce the same
//! output, which is what lets the parallel path share the sequential
//! path's results exactly.

pub mod style;
pub mod tiers;
pub mod variation;

use rayon::prelude::*;

use crate::models::{EnhancedTeamRecord, Manager, TeamRecord};

pub use style::{select_formation, select_style};
pub use tiers::{ca_tier, select_manager};
pub use variation::apply_variation;

/// Assign tactical identity to one team.
///
/// Fields already present on the record are kept as-is; only missing ones
/// are computed. `tactical_style` is descriptive metadata and is always
/// recomputed, even for records that arrive fully enhanced.
pub fn enhance_team(record: &TeamRecord, pool: &[Manager], index: usize) -> EnhancedTeamRecord {
    let style = select_style(record.avg_ca, index);

    let manager_id = record
        .manager_id
        .unwrap_or_else(|| select_manager(record.avg_ca, pool, index));
    let formation = record
        .formation
        .unwrap_or_else(|| select_formation(style, index));
    let tactics = record
        .tactics
        .unwrap_or_else(|| apply_variation(style.base_tactics(), index));

    log::trace!(
        "team index {}: ca {:.1} -> style {:?}, manager {}, formation {}",
        index,
        record.avg_ca,
        style,
        manager_id,
        formation.code()
    );

    EnhancedTeamRecord {
        avg_ca: record.avg_ca,
        manager_id,
        formation,
        tactics,
        tactical_style: style,
        extra: record.extra.clone(),
    }
}

/// Enhance every record in input order, using each record's position as its
/// index. Output order and length match the input exactly.
pub fn enhance_all(records: &[TeamRecord], pool: &[Manager]) -> Vec<EnhancedTeamRecord> {
    let enhanced: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(index, record)| enhance_team(record, pool, index))
        .collect();

    log::debug!(
        "enhanced {} teams against a pool of {} managers",
        enhanced.len(),
        pool.len()
    );
    enhanced
}

/// Parallel variant of [`enhance_all`]. Each team's enhancement is
/// independent, so the only coordination is the order-preserving collect;
/// results are identical to the sequential path.
pub fn enhance_all_parallel(records: &[TeamRecord], pool: &[Manager]) -> Vec<EnhancedTeamRecord> {
    records
        .par_iter()
        .enumerate()
        .map(|(index, record)| enhance_team(record, pool, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Formation, TacticalStyle, TacticsVector};
    use proptest::prelude::*;
    use serde_json::Map;

    fn pool(n: u32) -> Vec<Manager> {
        (1..=n)
            .map(|id| Manager {
                id,
                extra: Map::new(),
            })
            .collect()
    }

    fn team(avg_ca: f32) -> TeamRecord {
        TeamRecord {
            avg_ca,
            manager_id: None,
            formation: None,
            tactics: None,
            tactical_style: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_worked_example_elite_team() {
        let pool = pool(20);
        let enhanced = enhance_team(&team(150.0), &pool, 0);
        assert_eq!(enhanced.manager_id, 17);
        assert_eq!(enhanced.tactical_style, TacticalStyle::Attacking);
        assert_eq!(
            enhanced.formation,
            TacticalStyle::Attacking.formation_candidates()[0]
        );
    }

    #[test]
    fn test_present_fields_are_never_overwritten() {
        let custom_tactics = TacticsVector {
            attacking_intensity: 0.11,
            defensive_line_height: 0.22,
            width: 0.33,
            pressing_trigger: 0.44,
            tempo: 0.55,
            directness: 0.66,
        };
        let record = TeamRecord {
            avg_ca: 95.0,
            manager_id: Some(42),
            formation: None,
            tactics: Some(custom_tactics),
            tactical_style: None,
            extra: Map::new(),
        };

        let enhanced = enhance_team(&record, &pool(20), 3);
        assert_eq!(enhanced.manager_id, 42);
        assert_eq!(enhanced.tactics, custom_tactics);
        // formation was missing and gets filled from the sampled style
        let style = select_style(95.0, 3);
        assert_eq!(enhanced.formation, select_formation(style, 3));
    }

    #[test]
    fn test_fully_enhanced_record_passes_through() {
        let record = TeamRecord {
            avg_ca: 130.0,
            manager_id: Some(9),
            formation: Some(Formation::T532),
            tactics: Some(TacticsVector {
                attacking_intensity: 0.2,
                defensive_line_height: 0.2,
                width: 0.2,
                pressing_trigger: 0.2,
                tempo: 0.2,
                directness: 0.2,
            }),
            tactical_style: None,
            extra: Map::new(),
        };

        let enhanced = enhance_team(&record, &pool(20), 7);
        assert_eq!(enhanced.manager_id, 9);
        assert_eq!(enhanced.formation, Formation::T532);
        assert_eq!(enhanced.tactics, record.tactics.unwrap());
        // style tag is still attached as metadata
        assert_eq!(enhanced.tactical_style, select_style(130.0, 7));
    }

    #[test]
    fn test_enhance_all_preserves_order_and_length() {
        let records: Vec<_> = (0..50).map(|i| team(50.0 + i as f32 * 2.0)).collect();
        let pool = pool(15);

        let enhanced = enhance_all(&records, &pool);
        assert_eq!(enhanced.len(), records.len());
        for (record, out) in records.iter().zip(enhanced.iter()) {
            assert_eq!(out.avg_ca, record.avg_ca);
        }
    }

    #[test]
    fn test_enhance_all_is_deterministic() {
        let records: Vec<_> = (0..30).map(|i| team(60.0 + i as f32 * 3.0)).collect();
        let pool = pool(10);

        let first = enhance_all(&records, &pool);
        let second = enhance_all(&records, &pool);
        assert_eq!(first, second);

        // byte-identical through serialization as well
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_with_empty_pool() {
        let records: Vec<_> = (0..10).map(|i| team(100.0 + i as f32)).collect();
        let first = enhance_all(&records, &[]);
        let second = enhance_all(&records, &[]);
        assert_eq!(first, second);
        assert!(first.iter().all(|t| t.manager_id == 1));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<_> = (0..200).map(|i| team(40.0 + (i % 160) as f32)).collect();
        let pool = pool(25);

        let sequential = enhance_all(&records, &pool);
        let parallel = enhance_all_parallel(&records, &pool);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_formation_belongs_to_style() {
        let pool = pool(20);
        for index in 0..300 {
            let enhanced = enhance_team(&team((index % 170) as f32), &pool, index);
            assert!(enhanced
                .tactical_style
                .formation_candidates()
                .contains(&enhanced.formation));
        }
    }

    proptest! {
        #[test]
        fn prop_tactics_always_in_bounds(avg_ca in 0.0f32..200.0, index in 0usize..5_000) {
            let enhanced = enhance_team(&team(avg_ca), &pool(20), index);
            prop_assert!(enhanced.tactics.is_in_bounds());
        }

        #[test]
        fn prop_manager_resolves_into_pool(avg_ca in 0.0f32..200.0, index in 0usize..5_000, pool_size in 1u32..40) {
            let pool = pool(pool_size);
            let enhanced = enhance_team(&team(avg_ca), &pool, index);
            prop_assert!(pool.iter().any(|m| m.id == enhanced.manager_id));
        }
    }
}
