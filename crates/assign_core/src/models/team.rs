//! Stage team records: raw input shape and the enhanced output shape.
//!
//! Records round-trip losslessly: any field the engine does not know about
//! (names, ids, player lists) is carried through a flattened map untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::tactics::{TacticalStyle, TacticsVector};

/// Formation codes used by the stage-team data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Formation {
    #[serde(rename = "T433")]
    T433,
    #[serde(rename = "T4231")]
    T4231,
    #[serde(rename = "T352")]
    T352,
    #[serde(rename = "T541")]
    T541,
    #[serde(rename = "T532")]
    T532,
    #[serde(rename = "T4141")]
    T4141,
    #[serde(rename = "T442")]
    T442,
    #[serde(rename = "T4312")]
    T4312,
}

impl Formation {
    pub fn code(&self) -> &'static str {
        match self {
            Formation::T433 => "T433",
            Formation::T4231 => "T4231",
            Formation::T352 => "T352",
            Formation::T541 => "T541",
            Formation::T532 => "T532",
            Formation::T4141 => "T4141",
            Formation::T442 => "T442",
            Formation::T4312 => "T4312",
        }
    }
}

fn default_avg_ca() -> f32 {
    50.0
}

/// Raw stage team record as loaded from data.
///
/// `manager_id`, `formation` and `tactics` may already be present (teams
/// enhanced by an earlier run, or hand-authored); the engine fills only
/// what is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRecord {
    /// Aggregate capability rating of the squad
    #[serde(default = "default_avg_ca")]
    pub avg_ca: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<Formation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<TacticsVector>,
    /// Style tag from an earlier enhancement pass. Captured so re-fed
    /// output does not duplicate the key; the engine always recomputes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactical_style: Option<TacticalStyle>,
    /// Everything else in the record (name, stage id, players, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamRecord {
    /// True once manager, formation and tactics are all present
    pub fn is_fully_enhanced(&self) -> bool {
        self.manager_id.is_some() && self.formation.is_some() && self.tactics.is_some()
    }
}

/// Team record with tactical identity fully assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancedTeamRecord {
    #[serde(default = "default_avg_ca")]
    pub avg_ca: f32,
    pub manager_id: u32,
    pub formation: Formation,
    pub tactics: TacticsVector,
    /// Descriptive tag; always recomputed, never a gate for enhancement
    pub tactical_style: TacticalStyle,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formation_codes_round_trip() {
        let json = serde_json::to_string(&Formation::T4231).unwrap();
        assert_eq!(json, "\"T4231\"");

        let parsed: Formation = serde_json::from_str("\"T541\"").unwrap();
        assert_eq!(parsed, Formation::T541);
    }

    #[test]
    fn test_missing_avg_ca_defaults() {
        let record: TeamRecord = serde_json::from_value(json!({"name": "FC Test"})).unwrap();
        assert_eq!(record.avg_ca, 50.0);
        assert!(!record.is_fully_enhanced());
    }

    #[test]
    fn test_non_numeric_avg_ca_is_rejected() {
        let result: Result<TeamRecord, _> =
            serde_json::from_value(json!({"avg_ca": "strong", "name": "FC Test"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let input = json!({
            "name": "Seoul Strikers",
            "stage_id": 7,
            "avg_ca": 112.5,
            "players": [{"id": 1}, {"id": 2}]
        });
        let record: TeamRecord = serde_json::from_value(input.clone()).unwrap();
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_fully_enhanced_detection() {
        let record: TeamRecord = serde_json::from_value(json!({
            "avg_ca": 90.0,
            "manager_id": 3,
            "formation": "T442",
            "tactics": {
                "attacking_intensity": 0.5,
                "defensive_line_height": 0.5,
                "width": 0.6,
                "pressing_trigger": 0.5,
                "tempo": 0.5,
                "directness": 0.5
            }
        }))
        .unwrap();
        assert!(record.is_fully_enhanced());
    }
}
