// crates/assign_core/src/models/mod.rs
// Data model for the stage-team enhancement pipeline

pub mod manager;
pub mod tactics;
pub mod team;

pub use manager::{Manager, ManagerFile, DEFAULT_MANAGER_ID};
pub use tactics::{TacticalStyle, TacticsVector, STYLE_ORDER};
pub use team::{EnhancedTeamRecord, Formation, TeamRecord};
