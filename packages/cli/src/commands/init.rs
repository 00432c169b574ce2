use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ldcraft_form::FormState;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output path for the starter state file
    #[arg(default_value = "product.json")]
    pub path: PathBuf,

    /// Force overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            args.path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let state = FormState::default();
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(&args.path, json)?;

    println!("  {} Created {}", "✓".green(), args.path.display());
    println!();
    println!("Fill in the product fields, then run:");
    println!("  ldcraft generate {}", args.path.display());

    Ok(())
}
