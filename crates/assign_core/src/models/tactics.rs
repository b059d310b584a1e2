//! Tactical styles and the continuous tactics vector.
//!
//! Each style owns a base tactics preset and a fixed list of candidate
//! formations. Presets are design-table constants; the engine never invents
//! parameter values, it only perturbs these within bounds.

use serde::{Deserialize, Serialize};

use super::team::Formation;

/// Team-wide tactical parameters, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TacticsVector {
    pub attacking_intensity: f32,
    pub defensive_line_height: f32,
    pub width: f32,
    pub pressing_trigger: f32,
    pub tempo: f32,
    pub directness: f32,
}

impl TacticsVector {
    /// Shift every parameter by the same signed delta, clamping to [0, 1].
    ///
    /// A single shared delta produces a coherent "more aggressive" or
    /// "more passive" version of the preset rather than six uncorrelated
    /// shifts.
    pub fn shifted(&self, delta: f32) -> Self {
        let adjust = |v: f32| (v + delta).clamp(0.0, 1.0);
        Self {
            attacking_intensity: adjust(self.attacking_intensity),
            defensive_line_height: adjust(self.defensive_line_height),
            width: adjust(self.width),
            pressing_trigger: adjust(self.pressing_trigger),
            tempo: adjust(self.tempo),
            directness: adjust(self.directness),
        }
    }

    /// True when every parameter lies in [0.0, 1.0] inclusive
    pub fn is_in_bounds(&self) -> bool {
        self.as_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    pub fn as_array(&self) -> [f32; 6] {
        [
            self.attacking_intensity,
            self.defensive_line_height,
            self.width,
            self.pressing_trigger,
            self.tempo,
            self.directness,
        ]
    }
}

/// Tactical style classification for NPC teams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TacticalStyle {
    Attacking,
    Defensive,
    Balanced,
    Possession,
    Counter,
    Pressing,
}

/// Canonical style order. Weight tables and the cumulative sampler walk
/// styles in exactly this order; changing it changes every assignment.
pub const STYLE_ORDER: [TacticalStyle; 6] = [
    TacticalStyle::Attacking,
    TacticalStyle::Defensive,
    TacticalStyle::Balanced,
    TacticalStyle::Possession,
    TacticalStyle::Counter,
    TacticalStyle::Pressing,
];

// ============================================================================
// Base tactics presets (design table)
// ============================================================================

pub const ATTACKING_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.8,
    defensive_line_height: 0.7,
    width: 0.75,
    pressing_trigger: 0.7,
    tempo: 0.8,
    directness: 0.6,
};

pub const DEFENSIVE_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.3,
    defensive_line_height: 0.3,
    width: 0.5,
    pressing_trigger: 0.3,
    tempo: 0.4,
    directness: 0.4,
};

pub const BALANCED_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.5,
    defensive_line_height: 0.5,
    width: 0.6,
    pressing_trigger: 0.5,
    tempo: 0.5,
    directness: 0.5,
};

pub const POSSESSION_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.5,
    defensive_line_height: 0.6,
    width: 0.7,
    pressing_trigger: 0.6,
    tempo: 0.3,
    directness: 0.3,
};

pub const COUNTER_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.7,
    defensive_line_height: 0.35,
    width: 0.5,
    pressing_trigger: 0.4,
    tempo: 0.9,
    directness: 0.85,
};

pub const PRESSING_PRESET: TacticsVector = TacticsVector {
    attacking_intensity: 0.7,
    defensive_line_height: 0.75,
    width: 0.65,
    pressing_trigger: 0.9,
    tempo: 0.7,
    directness: 0.6,
};

impl TacticalStyle {
    /// Base tactics vector for this style
    pub fn base_tactics(&self) -> TacticsVector {
        match self {
            Self::Attacking => ATTACKING_PRESET,
            Self::Defensive => DEFENSIVE_PRESET,
            Self::Balanced => BALANCED_PRESET,
            Self::Possession => POSSESSION_PRESET,
            Self::Counter => COUNTER_PRESET,
            Self::Pressing => PRESSING_PRESET,
        }
    }

    /// The 3 candidate formations registered for this style
    pub fn formation_candidates(&self) -> [Formation; 3] {
        match self {
            Self::Attacking => [Formation::T433, Formation::T4231, Formation::T352],
            Self::Defensive => [Formation::T541, Formation::T532, Formation::T4141],
            Self::Balanced => [Formation::T442, Formation::T4231, Formation::T433],
            Self::Possession => [Formation::T433, Formation::T4231, Formation::T4312],
            Self::Counter => [Formation::T442, Formation::T4141, Formation::T352],
            Self::Pressing => [Formation::T4231, Formation::T433, Formation::T442],
        }
    }

    pub fn display_name_en(&self) -> &'static str {
        match self {
            Self::Attacking => "Attacking",
            Self::Defensive => "Defensive",
            Self::Balanced => "Balanced",
            Self::Possession => "Possession",
            Self::Counter => "Counter",
            Self::Pressing => "Pressing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_in_bounds() {
        for style in STYLE_ORDER {
            assert!(
                style.base_tactics().is_in_bounds(),
                "{:?} preset out of bounds",
                style
            );
        }
    }

    #[test]
    fn test_shift_clamps_both_ends() {
        let high = ATTACKING_PRESET.shifted(0.5);
        assert!(high.is_in_bounds());
        assert_eq!(high.attacking_intensity, 1.0);

        let low = DEFENSIVE_PRESET.shifted(-0.5);
        assert!(low.is_in_bounds());
        assert_eq!(low.attacking_intensity, 0.0);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let base = POSSESSION_PRESET;
        assert_eq!(base.shifted(0.0), base);
    }

    #[test]
    fn test_style_serde_uses_plain_names() {
        let json = serde_json::to_string(&TacticalStyle::Possession).unwrap();
        assert_eq!(json, "\"Possession\"");

        let parsed: TacticalStyle = serde_json::from_str("\"Counter\"").unwrap();
        assert_eq!(parsed, TacticalStyle::Counter);
    }

    #[test]
    fn test_every_style_has_three_candidates() {
        for style in STYLE_ORDER {
            assert_eq!(style.formation_candidates().len(), 3);
        }
    }
}
