//! NPC Enhancer Library
//!
//! stage_teams JSON → 전술 데이터 부여 → enhanced JSON 출력
//! Wraps the assign_core engine with file loading/saving and run metadata.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use assign_core::{enhance_all, EnhancedTeamRecord, Manager, ManagerFile, TeamRecord};

/// Metadata about one enhancement run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// 생성 시각 (RFC3339 형식)
    pub created_at: String,
    /// Number of teams written to the output
    pub teams_enhanced: usize,
    /// Size of the manager pool used
    pub manager_pool_size: usize,
    /// Teams per tactical style, keyed by style name
    pub style_distribution: BTreeMap<String, usize>,
}

/// Load the manager roster from a `{"managers": [...]}` file
pub fn load_managers(path: &Path) -> Result<Vec<Manager>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read managers file: {}", path.display()))?;
    let file: ManagerFile =
        serde_json::from_str(&json_str).context("Failed to parse managers JSON")?;
    Ok(file.managers)
}

/// Load the stage-team list
pub fn load_teams(path: &Path) -> Result<Vec<TeamRecord>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file: {}", path.display()))?;
    let teams: Vec<TeamRecord> =
        serde_json::from_str(&json_str).context("Failed to parse stage teams JSON")?;
    Ok(teams)
}

/// Enhance a stage-team file and write the result.
///
/// The output is tab-indented JSON so diffs against data produced by the
/// original pipeline stay clean.
pub fn enhance_stage_teams(
    input_teams: &Path,
    managers: &[Manager],
    output: &Path,
) -> Result<RunMetadata> {
    let teams = load_teams(input_teams)?;
    let enhanced = enhance_all(&teams, managers);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output, to_tab_indented_json(&enhanced)?)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(RunMetadata {
        created_at: chrono::Utc::now().to_rfc3339(),
        teams_enhanced: enhanced.len(),
        manager_pool_size: managers.len(),
        style_distribution: style_distribution(&enhanced),
    })
}

/// Count teams per tactical style
pub fn style_distribution(teams: &[EnhancedTeamRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for team in teams {
        *counts
            .entry(team.tactical_style.display_name_en().to_string())
            .or_insert(0) += 1;
    }
    counts
}

fn to_tab_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize enhanced teams")?;
    Ok(buf)
}
