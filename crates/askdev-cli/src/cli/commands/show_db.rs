use askdev_core::Catalog;

use crate::cli::helpers::write_stdout;
use crate::exit_codes::SUCCESS;

const SAMPLE_SIZE: usize = 10;

pub fn run() -> anyhow::Result<i32> {
    let catalog = Catalog::builtin();
    write_stdout(&render(&catalog))?;
    Ok(SUCCESS)
}

fn render(catalog: &Catalog) -> String {
    let sample: Vec<&str> = catalog.patterns().take(SAMPLE_SIZE).collect();
    format!(
        "Database contains {} error patterns\nSample error patterns: {}",
        catalog.len(),
        sample.join(", ")
    )
}
