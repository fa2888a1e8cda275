//! Implementation of the `switchtext expand` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use serde::Serialize;
use switchtext::{DEFAULT_MAX_PASSES, Engine, MemoryState};

/// Arguments for the expand command.
#[derive(Debug, clap::Args)]
pub struct ExpandArgs {
    /// Message text to expand
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,

    /// File containing message text to expand
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// JSON state snapshot; defaults to empty state
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Marker character introducing directive codes
    #[arg(long, default_value_t = '\\')]
    pub marker: char,

    /// Maximum expansion passes before reporting divergence
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Skip the grammar post-processor
    #[arg(long)]
    pub no_grammar: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for expand results.
#[derive(Serialize)]
pub struct ExpandResult {
    pub result: String,
    pub empty: bool,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> miette::Result<i32> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_to_string(path)
            .map_err(|e| miette::miette!("cannot read message file {}: {}", path.display(), e))?,
        (None, None) => return Err(miette::miette!("either --text or --file is required")),
    };

    let state: MemoryState = match &args.state {
        Some(path) => {
            let content = read_to_string(path).map_err(|e| {
                miette::miette!("cannot read state file {}: {}", path.display(), e)
            })?;
            serde_json::from_str(&content)
                .map_err(|e| miette::miette!("invalid state snapshot: {}", e))?
        }
        None => MemoryState::default(),
    };

    let engine = Engine::builder()
        .marker(args.marker)
        .max_passes(args.max_passes)
        .grammar(!args.no_grammar)
        .build();

    match engine.expand(&text, &state) {
        Ok(result) => {
            if args.json {
                let empty = engine
                    .is_empty_after_expansion(&text, &state)
                    .unwrap_or(false);
                let output = ExpandResult { result, empty };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Expansion error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
