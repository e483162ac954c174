//! CLI entry point for the halftone dithering tool

use clap::Parser;
use halftone::io::cli::{Cli, FileProcessor};

fn main() -> halftone::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    let written = processor.process()?;
    log::info!("{} file(s) written", written.len());
    Ok(())
}
