use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use board::{FormatOption, RenderOptions};
use clap::ValueEnum;
use common::{DEFAULT_BOARD_URL, DEFAULT_ENGINE_URL};
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings shared by the binaries, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub engine_url: Url,
    pub board_url: Url,
    /// How long the batch tool waits on a single test case.
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if exists
        dotenv::dotenv().ok();

        let engine_url = env::var("BATTLESCRAPE_ENGINE_URL")
            .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        let board_url =
            env::var("BATTLESCRAPE_BOARD_URL").unwrap_or_else(|_| DEFAULT_BOARD_URL.to_string());
        let timeout_secs = match env::var("BATTLESCRAPE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("BATTLESCRAPE_TIMEOUT_SECS is not a number: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            engine_url: Url::parse(&engine_url)
                .with_context(|| format!("Invalid engine URL: {engine_url}"))?,
            board_url: Url::parse(&board_url)
                .with_context(|| format!("Invalid board URL: {board_url}"))?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn render_options(&self, format: FormatOption) -> RenderOptions {
        RenderOptions {
            format,
            board_url: self.board_url.as_str().trim_end_matches('/').to_string(),
            engine_url: self.engine_url.as_str().trim_end_matches('/').to_string(),
        }
    }
}

/// Comment style flag shared by both binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    None,
    Java,
    Python,
}

impl From<FormatArg> for FormatOption {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::None => FormatOption::None,
            FormatArg::Java => FormatOption::Java,
            FormatArg::Python => FormatOption::Python,
        }
    }
}

/// Install the tracing subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_options_drop_trailing_slashes() {
        let config = Config {
            engine_url: Url::parse(DEFAULT_ENGINE_URL).unwrap(),
            board_url: Url::parse(DEFAULT_BOARD_URL).unwrap(),
            timeout: Duration::from_secs(1),
        };
        let options = config.render_options(FormatOption::Java);
        assert_eq!(options, RenderOptions::new(FormatOption::Java));
    }
}
