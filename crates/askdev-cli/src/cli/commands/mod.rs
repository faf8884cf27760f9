use super::args::*;

pub mod demo;
pub mod explain;
pub mod lookup;
pub mod show_db;

use crate::cli::helpers::write_stdout;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        None | Some(Command::Demo) => demo::cmd_demo(),
        Some(Command::Explain(args)) => explain::run(args),
        Some(Command::Lookup(args)) => lookup::run(args),
        Some(Command::ShowDb) => show_db::run(),
        Some(Command::Version) => {
            write_stdout(env!("CARGO_PKG_VERSION"))?;
            Ok(SUCCESS)
        }
    }
}
