use anyhow::{Context, Result};
use battlescrape::{
    Config, EngineClient, FileSink, FormatArg, OutputSink, StdoutSink, init_tracing,
    parse_game_id, scrape,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    Board,
    Frame,
    All,
    None,
}

#[derive(Parser, Debug)]
#[command(
    name = "battlescrape",
    about = "Scrape a frame from a Battlesnake game and render it as a text board"
)]
struct Args {
    /// Game URL, e.g. https://play.battlesnake.com/g/<game_id>/ (a bare id also works)
    game_url: String,

    /// Turn of the game to render
    turn: u32,

    /// Which output to print
    #[arg(short, long, value_enum, default_value = "board")]
    display: Selection,

    /// Which output to export to the output file
    #[arg(short, long, value_enum, default_value = "frame")]
    copy: Selection,

    /// Comment style wrapped around the board
    #[arg(short, long, value_enum, default_value = "none")]
    format: FormatArg,

    /// File the exported output is written to
    #[arg(short, long, default_value = "battlescrape.out")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::from_env()?;
    let game_id = parse_game_id(&args.game_url)?;
    let provider = EngineClient::new(config.engine_url.clone());
    let options = config.render_options(args.format.into());

    info!("Scraping game {} turn {} from {}", game_id, args.turn, config.engine_url);
    let scraped = scrape(&provider, &game_id, args.turn, &options)
        .await
        .with_context(|| format!("Failed to scrape game {} turn {}", game_id, args.turn))?;

    let display = match args.display {
        Selection::Board => Some(format!("{}\n", scraped.board)),
        Selection::Frame => Some(format!("\n{}\n\n", scraped.frame_string)),
        Selection::All => Some(format!("{}\n{}\n\n", scraped.board, scraped.frame_string)),
        Selection::None => None,
    };
    if let Some(text) = display {
        StdoutSink.write_output(&text)?;
    }

    let export = match args.copy {
        Selection::Board => Some(("Board", scraped.board.clone())),
        Selection::Frame => Some(("Frame", scraped.frame_string.clone())),
        Selection::All => Some((
            "Board and frame",
            format!("{}\n{}", scraped.board, scraped.frame_string),
        )),
        Selection::None => None,
    };
    if let Some((what, text)) = export {
        let mut sink = FileSink::new(&args.output);
        sink.write_output(&text)?;
        println!("{} written to {}", what, sink.describe());
    }

    Ok(())
}
