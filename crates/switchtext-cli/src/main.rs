//! Switchtext CLI entry point.
//!
//! Provides command-line tools for working with switchable message text:
//! - `switchtext expand` - Expand a message against a state snapshot
//! - `switchtext check` - Lint message files for directive mistakes
//! - `switchtext classify` - Inspect the vowel-sound classifier

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, ClassifyArgs, ExpandArgs, run_check, run_classify, run_expand};

/// Switchable message text tools.
#[derive(Debug, Parser)]
#[command(name = "switchtext")]
#[command(about = "Switchable message text tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand a message against a JSON state snapshot
    Expand(ExpandArgs),
    /// Lint message files for directive mistakes
    Check(CheckArgs),
    /// Show vowel-sound classification and article choice for words
    Classify(ClassifyArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Expand(args) => run_expand(args),
        Commands::Check(args) => run_check(args),
        Commands::Classify(args) => run_classify(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
