mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, generate, init, CheckArgs, GenerateArgs, InitArgs};

/// LDCraft CLI - product review structured data, from a state file
#[derive(Parser, Debug)]
#[command(name = "ldcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter form state file
    Init(InitArgs),

    /// Validate a form state file
    Check(CheckArgs),

    /// Generate the JSON-LD snippet from a form state file
    Generate(GenerateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init(args) => init(args),
        Command::Check(args) => check(args),
        Command::Generate(args) => generate(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
