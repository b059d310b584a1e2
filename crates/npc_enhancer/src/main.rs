//! NPC Enhancer CLI
//!
//! stage_teams_safe.json + dummy_managers.json → stage_teams_enhanced.json

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "npc_enhancer")]
#[command(about = "Assign managers, formations and tactics to NPC stage teams", long_about = None)]
struct Cli {
    /// Input stage teams JSON file path
    #[arg(long)]
    r#in: PathBuf,

    /// Manager roster JSON file path ({"managers": [...]})
    #[arg(long)]
    managers: Option<PathBuf>,

    /// Output enhanced JSON file path
    #[arg(long)]
    out: PathBuf,

    /// Output run metadata JSON file
    #[arg(long)]
    metadata: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🔨 Enhancing NPC stage teams...");
    println!("   Input:  {}", cli.r#in.display());
    println!("   Output: {}", cli.out.display());

    let managers = match &cli.managers {
        Some(path) if path.exists() => {
            let managers = npc_enhancer::load_managers(path)?;
            println!("   Managers: {} loaded from {}", managers.len(), path.display());
            managers
        }
        Some(path) => {
            println!(
                "⚠️  Managers file not found ({}), using default manager id",
                path.display()
            );
            Vec::new()
        }
        None => {
            println!("⚠️  No managers file given, using default manager id");
            Vec::new()
        }
    };

    let meta = npc_enhancer::enhance_stage_teams(&cli.r#in, &managers, &cli.out)?;

    print_summary(&meta);

    if let Some(metadata_path) = cli.metadata {
        let metadata_json = serde_json::to_string_pretty(&meta)?;
        std::fs::write(&metadata_path, metadata_json)?;
        println!("\n📄 Metadata saved to: {}", metadata_path.display());
    }

    Ok(())
}

fn print_summary(meta: &npc_enhancer::RunMetadata) {
    println!("\n✅ Enhancement complete!");
    println!("   Teams enhanced: {}", meta.teams_enhanced);
    println!("   Manager pool:   {}", meta.manager_pool_size);
    println!("   Style distribution:");
    for (style, count) in &meta.style_distribution {
        println!(
            "     - {}: {} teams ({:.1}%)",
            style,
            count,
            100.0 * *count as f64 / meta.teams_enhanced.max(1) as f64
        );
    }
}
