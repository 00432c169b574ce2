use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ldcraft_emit::{project, snippet};
use ldcraft_validate::{validate, DiagnosticLevel, ValidateOptions};
use std::fs;
use std::path::PathBuf;

use crate::commands::load_state;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Form state file to project
    pub input: PathBuf,

    /// Emit the bare JSON document instead of the script snippet
    #[arg(long)]
    pub json: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn generate(args: GenerateArgs) -> Result<()> {
    let state = load_state(&args.input)?;

    // Diagnostics are advisory here: the live form keeps generating while
    // fields are invalid, and so does the CLI. They go to stderr so the
    // snippet on stdout stays clean to pipe.
    let diagnostics = validate(&state, ValidateOptions::default());
    for diagnostic in &diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
        };
        eprintln!(
            "  {} [{}] {}: {}",
            level_str, diagnostic.rule, diagnostic.field, diagnostic.message
        );
    }

    let output = if args.json {
        serde_json::to_string_pretty(&project(&state))?
    } else {
        snippet(&state)
    };

    match &args.out {
        Some(path) => {
            fs::write(path, output)?;
            println!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}
