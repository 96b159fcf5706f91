use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use wordsmith::cli::Cli;
use wordsmith::diagnostics::TracingDiagnostics;
use wordsmith::input::{read_lines, read_words};
use wordsmith::output::build_writer;
use wordsmith::runner::Runner;

fn setup_logging(level: &str) -> Result<()> {
    let level = match level {
        "silent" => return Ok(()),
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set log subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level())?;

    let started = chrono::Local::now();
    info!("-- init @ {} --", started.format("%Y-%m-%d %H:%M:%S"));

    let mut diag = TracingDiagnostics::new();
    let options = cli.raw_options().build(&mut diag);
    debug!("options: {}", serde_json::to_string(&options)?);

    let words = read_words(&cli.words)?;
    let numbers = match &cli.numbers {
        Some(p) => read_lines(p)?,
        None => Vec::new(),
    };

    let mut out = build_writer(cli.output.clone(), &cli.output_type, cli.gzip(), cli.append)?;
    let runner = Runner::new(options);
    let summary = runner.run(&words, &numbers, &mut *out, &mut diag)?;
    out.close()?;

    info!(
        warnings = diag.count,
        "-- finished @ {} :: {} results in total for {} lines --",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        summary.results,
        summary.lines
    );
    Ok(())
}
