//! twinfind - main entry point

use std::path::Path;

use anyhow::Result;
use twin_find::{ElementFinder, TracingReport};

const USAGE: &str = "Exactly 3 parameters must be specified: \
    <origin_file_path> <other_sample_file_path> <target_element_id>";

fn main() -> Result<()> {
    // Initialize logging (stderr, info unless overridden via RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [original, changed, target_id] = args.as_slice() else {
        tracing::error!("{USAGE}");
        return Ok(());
    };

    let mut finder = ElementFinder::new(TracingReport);
    finder.find_and_report(Path::new(original), Path::new(changed), target_id)?;
    Ok(())
}
