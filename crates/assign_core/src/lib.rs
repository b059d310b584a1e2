//! # assign_core - Deterministic Tactical Identity Assignment Engine
//!
//! Assigns manager, formation, tactical style and a continuous tactics
//! vector to NPC stage teams from each team's aggregate strength rating
//! (`avg_ca`) and its position in the team list.
//!
//! ## Features
//! - 100% deterministic (same input list = same output, byte for byte)
//! - No RNG: tie-breaking and variety come from index hashing
//! - Idempotent: already-enhanced records pass through unchanged
//! - JSON API for easy integration with game engines like Godot

pub mod api;
pub mod assign;
pub mod error;
pub mod models;

// Re-export main API
pub use api::{enhance_teams_json, EnhanceRequest, EnhanceResponse};
pub use assign::{
    apply_variation, ca_tier, enhance_all, enhance_all_parallel, enhance_team, select_formation,
    select_manager, select_style,
};
pub use error::{EnhanceError, Result};
pub use models::{
    EnhancedTeamRecord, Formation, Manager, ManagerFile, TacticalStyle, TacticsVector, TeamRecord,
    DEFAULT_MANAGER_ID, STYLE_ORDER,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
