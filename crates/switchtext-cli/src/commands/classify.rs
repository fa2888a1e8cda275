//! Implementation of the `switchtext classify` command.

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use switchtext::grammar::starts_with_vowel_sound;

/// Arguments for the classify command.
#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Words or numerals to classify
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one classification.
#[derive(Serialize)]
pub struct Classification {
    pub word: String,
    pub vowel_sound: bool,
    pub article: &'static str,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> miette::Result<i32> {
    let rows: Vec<Classification> = args
        .words
        .iter()
        .map(|word| {
            let vowel_sound = starts_with_vowel_sound(word);
            Classification {
                word: word.clone(),
                vowel_sound,
                article: if vowel_sound { "an" } else { "a" },
            }
        })
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Word", "Sound", "Article"]);
    for row in &rows {
        table.add_row([
            Cell::new(&row.word),
            Cell::new(if row.vowel_sound { "vowel" } else { "consonant" }),
            Cell::new(row.article),
        ]);
    }
    println!("{table}");
    Ok(exitcode::OK)
}
