use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use battlescrape::{
    Config, EngineClient, FileSink, FormatArg, GameDataProvider, OutputSink, StdoutSink,
    init_tracing, log_progress, parse_cases, run_batch,
};
use clap::Parser;
use tokio::sync::watch;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "battlescrape-batch",
    about = "Generate Kotlin move tests from a list of Battlesnake game turns"
)]
struct Args {
    /// File with one `name game_url turn player moves` entry per line
    file: PathBuf,

    /// Comment style wrapped around each board
    #[arg(short, long, value_enum, default_value = "java")]
    format: FormatArg,

    /// File the generated tests are written to
    #[arg(short, long, default_value = "battlescrape-tests.kt")]
    output: PathBuf,

    /// Seconds to wait for each test case (overrides BATTLESCRAPE_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::from_env()?;
    let timeout = args.timeout.map(Duration::from_secs).unwrap_or(config.timeout);

    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read test cases from {:?}", args.file))?;
    let cases = parse_cases(&contents)?;
    info!("Preparing {} test(s) from {:?}", cases.len(), args.file);

    let provider: Arc<dyn GameDataProvider> =
        Arc::new(EngineClient::new(config.engine_url.clone()));
    let options = config.render_options(args.format.into());

    let (status_tx, status_rx) = watch::channel(String::from("starting"));
    let logger = tokio::spawn(log_progress(status_rx, Duration::from_secs(1)));

    let result = run_batch(provider, cases, options, timeout, status_tx).await;
    // The sender is gone once run_batch returns, so the logger stops on its own
    let _ = logger.await;
    let output = result?;

    StdoutSink.write_output(&format!("\n{}\n", output))?;
    let mut sink = FileSink::new(&args.output);
    sink.write_output(&output)?;
    println!("Tests written to {}", sink.describe());

    Ok(())
}
