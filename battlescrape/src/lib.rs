pub mod config;
pub mod game_url;
pub mod provider;
pub mod scrape;
pub mod sink;
pub mod testgen;

pub use config::{Config, FormatArg, init_tracing};
pub use game_url::parse_game_id;
pub use provider::{EngineClient, GameDataProvider, StaticProvider};
pub use scrape::{Scrape, scrape};
pub use sink::{FileSink, OutputSink, StdoutSink};
pub use testgen::{TestCase, kotlin_test, log_progress, parse_cases, run_batch};
