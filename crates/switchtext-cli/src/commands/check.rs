//! Implementation of the `switchtext check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;
use switchtext::lint;

use crate::output::LintDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Message files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Marker character introducing directive codes
    #[arg(long, default_value_t = '\\')]
    pub marker: char,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one lint finding.
#[derive(Serialize)]
pub struct CheckFinding {
    pub file: String,
    pub offset: usize,
    pub len: usize,
    pub message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut findings = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("cannot read {}: {}", path.display(), e))?;
        let warnings = lint(&content, args.marker);

        if !args.json {
            for warning in &warnings {
                let report = miette::Report::new(LintDiagnostic::from_warning(
                    path, &content, warning,
                ));
                eprintln!("{:?}", report);
            }
        }
        findings.extend(warnings.into_iter().map(|warning| CheckFinding {
            file: path.display().to_string(),
            offset: warning.span.start,
            len: warning.span.len(),
            message: warning.to_string(),
        }));
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&findings).expect("JSON serialization should not fail")
        );
    } else if findings.is_empty() {
        println!("{} {} file(s) checked, no issues", "ok:".green(), args.files.len());
    } else {
        println!(
            "{} {} issue(s) in {} file(s)",
            "error:".red(),
            findings.len(),
            args.files.len()
        );
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
