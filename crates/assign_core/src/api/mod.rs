//! JSON-string API boundary for host integration.
//!
//! Hosts hand the engine a single JSON request and get a JSON response
//! back; no types cross the boundary. Malformed input fails here, before
//! any engine logic runs.

use serde::{Deserialize, Serialize};

use crate::assign::enhance_all;
use crate::error::{EnhanceError, Result};
use crate::models::{EnhancedTeamRecord, Manager, TeamRecord};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub teams: Vec<TeamRecord>,
    /// Ordered weakest-first; omitted or empty means every team gets the
    /// default manager id
    #[serde(default)]
    pub managers: Vec<Manager>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub schema_version: u8,
    pub teams: Vec<EnhancedTeamRecord>,
}

/// Enhance a batch of teams from a JSON request string.
///
/// Request shape: `{"teams": [...], "managers": [...]}`.
/// Response shape: `{"schema_version": 1, "teams": [...]}` with output
/// order matching the request's team order.
pub fn enhance_teams_json(request_json: &str) -> Result<String> {
    let request: EnhanceRequest = serde_json::from_str(request_json).map_err(|err| {
        if err.is_data() {
            EnhanceError::InvalidTeamRecord(err.to_string())
        } else {
            EnhanceError::DeserializationError(err.to_string())
        }
    })?;

    let teams = enhance_all(&request.teams, &request.managers);

    let response = EnhanceResponse {
        schema_version: SCHEMA_VERSION,
        teams,
    };
    Ok(serde_json::to_string(&response)?)
}
