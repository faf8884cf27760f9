use anyhow::Context;
use askdev_core::{NullSafetyDemo, StdoutSink};

use crate::exit_codes::SUCCESS;

pub fn cmd_demo() -> anyhow::Result<i32> {
    tracing::debug!("running null-safety demo");
    let mut demo = NullSafetyDemo::new(StdoutSink);
    demo.run().context("failed to write demo output")?;
    Ok(SUCCESS)
}
