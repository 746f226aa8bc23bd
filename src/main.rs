mod cli_main;

use anyhow::Context;
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use bruijn::pipeline;
use cli_main::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = cli.to_config();

    let report = pipeline::run(&config)
        .with_context(|| format!("Assembly of {} failed", config.input.display()))?;

    info!(
        "Wrote {} contigs to {} in {:.2}s",
        report.contigs.total_contigs,
        config.output.display(),
        start.elapsed().as_secs_f32()
    );
    Ok(())
}
