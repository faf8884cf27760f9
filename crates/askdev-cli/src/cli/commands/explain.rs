//! CLI command: askdev explain
//!
//! Match an error log against the known-error catalog and print the cause,
//! a suggested fix and the frames of the offending block.
//!
//! Usage:
//!   askdev explain [LOG] [--format text|json]
//!
//! Examples:
//!   adb logcat -d | askdev explain
//!   askdev explain "$(cat crash.txt)" --format json

use anyhow::Result;
use askdev_core::{Analyzer, Diagnosis};

use crate::cli::args::{ExplainArgs, OutputFormat};
use crate::cli::helpers::{read_input, write_stdout};
use crate::exit_codes::{NO_MATCH, SUCCESS};

pub fn run(args: ExplainArgs) -> Result<i32> {
    let content = read_input(args.log.as_deref())?;
    if content.trim().is_empty() {
        eprintln!("No input provided.");
        return Ok(NO_MATCH);
    }

    let Some(diagnosis) = Analyzer::default().diagnose(&content) else {
        eprintln!(
            "No known error matched. Try again with more logs or update the error database."
        );
        return Ok(NO_MATCH);
    };

    write_stdout(&format_diagnosis(&diagnosis, args.format)?)?;
    Ok(SUCCESS)
}

fn format_diagnosis(diagnosis: &Diagnosis, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(diagnosis)?,
        OutputFormat::Text => diagnosis.to_terminal().trim_end().to_string(),
    })
}
