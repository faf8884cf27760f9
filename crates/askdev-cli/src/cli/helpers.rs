use std::io::{self, Read, Write};

use anyhow::Context;

/// Writes `text` plus a newline to stdout. Write failures propagate so
/// `main` can map them to `INTERNAL_ERROR`.
pub fn write_stdout(text: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)
        .and_then(|_| handle.flush())
        .context("failed to write to stdout")
}

/// Reads log text from the argument, or from stdin when it is absent or `-`.
pub fn read_input(arg: Option<&str>) -> anyhow::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read log from stdin")?;
            Ok(buf)
        }
    }
}

/// Draws `lines` inside a box with `title` in the top border.
pub fn render_panel(title: &str, lines: &[String]) -> String {
    let title = format!(" {} ", title);
    let body_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = body_width.max(title.chars().count() + 2) + 2;

    let mut out = String::new();
    out.push('+');
    out.push_str("--");
    out.push_str(&title);
    out.push_str(&"-".repeat(inner - 2 - title.chars().count()));
    out.push_str("+\n");
    for line in lines {
        let pad = body_width - line.chars().count() + (inner - 2 - body_width);
        out.push_str("| ");
        out.push_str(line);
        out.push_str(&" ".repeat(pad));
        out.push_str(" |\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(inner));
    out.push('+');
    out
}
