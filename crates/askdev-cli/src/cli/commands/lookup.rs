use askdev_core::catalog::status_message;
use askdev_core::Catalog;

use crate::cli::args::LookupArgs;
use crate::cli::helpers::{render_panel, write_stdout};
use crate::exit_codes::{NO_MATCH, SUCCESS};

pub fn run(args: LookupArgs) -> anyhow::Result<i32> {
    let code = args.code.trim().to_ascii_uppercase();

    let Some(lines) = describe(&Catalog::builtin(), &args.code) else {
        eprintln!("Error code {} not found in the database.", code);
        return Ok(NO_MATCH);
    };

    let out = if args.raw {
        lines.join("\n")
    } else {
        render_panel(&format!("Error {}", code), &lines)
    };
    write_stdout(&out)?;
    Ok(SUCCESS)
}

/// Message lines for a status code or catalogued exception.
fn describe(catalog: &Catalog, code: &str) -> Option<Vec<String>> {
    if let Some(msg) = status_message(code) {
        return Some(vec![msg.to_string()]);
    }

    let entry = catalog.lookup(code)?;
    let mut lines = vec![
        entry.cause.clone(),
        format!("Suggestion: {}", entry.suggestion),
    ];
    if let Some(link) = &entry.link {
        lines.push(format!("Link: {}", link));
    }
    Some(lines)
}
