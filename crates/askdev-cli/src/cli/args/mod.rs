use clap::{Parser, Subcommand};

pub mod common;
pub use common::*;

#[derive(Parser)]
#[command(
    name = "askdev",
    version,
    about = "Android error CLI assistant: explain errors from your terminal. Runs the null-safety demo when no command is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the null-safety demo (default)
    Demo,
    /// Explain an error log against the known-error catalog
    Explain(ExplainArgs),
    /// Look up an HTTP status code or exception name
    Lookup(LookupArgs),
    /// Show information about the error database
    ShowDb,
    /// Print the askdev version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Log text to analyze; reads stdin when omitted or `-`
    pub log: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "ASKDEV_FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LookupArgs {
    /// Error code or exception name (e.g. 404, NullPointerException)
    pub code: String,

    /// Print only the message, without the frame
    #[arg(long)]
    pub raw: bool,
}
