use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ldcraft_validate::{validate, Diagnostic, DiagnosticLevel, ValidateOptions};
use std::path::PathBuf;

use crate::commands::load_state;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Form state file to validate
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let state = load_state(&args.input)?;
    let diagnostics = validate(&state, ValidateOptions::default());

    let errors = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Error))
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
        .count();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        println!("{}", args.input.display());

        if diagnostics.is_empty() {
            println!("  {} No issues found!", "✓".green());
        } else {
            for diagnostic in &diagnostics {
                print_diagnostic(diagnostic);
            }
        }

        println!();
        if errors > 0 {
            println!("  {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("  {} {}", "Warnings:".yellow(), warnings);
        }
    }

    // Exit with error code if there are errors
    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let level_str = match diagnostic.level {
        DiagnosticLevel::Error => "error".red().bold(),
        DiagnosticLevel::Warning => "warning".yellow().bold(),
    };

    println!(
        "  {} [{}] {}: {}",
        level_str, diagnostic.rule, diagnostic.field, diagnostic.message
    );
}
