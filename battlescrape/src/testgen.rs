use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use board::RenderOptions;
use common::{BoardError, BoardResult};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::game_url::parse_game_id;
use crate::provider::GameDataProvider;
use crate::scrape::{Scrape, scrape};

/// One line of a batch file: `name game_url turn player moves`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub game_id: String,
    pub turn: u32,
    pub player: String,
    /// Moves the player may make and still pass.
    pub moves: Vec<String>,
}

impl TestCase {
    /// `None` for blank lines and `#` comments.
    pub fn parse_line(line: &str, line_no: usize) -> BoardResult<Option<TestCase>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, game_url, turn, player, moves] = fields.as_slice() else {
            return Err(BoardError::invalid_input(format!(
                "line {line_no}: expected 5 fields (name game_url turn player moves), found {}",
                fields.len()
            )));
        };

        let turn = turn.parse::<u32>().map_err(|_| {
            BoardError::invalid_input(format!("line {line_no}: turn {turn:?} is not a number"))
        })?;

        Ok(Some(TestCase {
            name: name.to_string(),
            game_id: parse_game_id(game_url)?,
            turn,
            player: player.to_string(),
            moves: moves
                .split(',')
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect(),
        }))
    }
}

pub fn parse_cases(contents: &str) -> BoardResult<Vec<TestCase>> {
    let mut cases = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if let Some(case) = TestCase::parse_line(line, idx + 1)? {
            cases.push(case);
        }
    }
    Ok(cases)
}

/// Kotlin test asserting the player picks one of the expected moves.
pub fn kotlin_test(case: &TestCase, scrape: &Scrape) -> String {
    let moves = case
        .moves
        .iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{board}\n@Test\nfun {name}() {{\n    val frameString = {frame}\n    assertMove(frameString, \"{player}\", listOf({moves}), boardWidth = {width}, boardHeight = {height})\n}}\n\n",
        board = scrape.board,
        name = case.name,
        frame = scrape.frame_string,
        player = case.player,
        moves = moves,
        width = scrape.game.width,
        height = scrape.game.height,
    )
}

pub async fn build_test(
    provider: Arc<dyn GameDataProvider>,
    case: TestCase,
    options: RenderOptions,
) -> BoardResult<String> {
    let scrape = scrape(provider.as_ref(), &case.game_id, case.turn, &options).await?;
    Ok(kotlin_test(&case, &scrape))
}

fn send_status(status_tx: &watch::Sender<String>, idx: usize, total: usize, status: impl Into<String>) {
    let _ = status_tx.send(format!("test {}/{}: {}", idx, total, status.into()));
}

/// Build every case concurrently and join the results in file order.
///
/// Each case gets `timeout` from the moment the coordinator starts waiting on
/// it. The first failure or timeout aborts the outstanding cases.
pub async fn run_batch(
    provider: Arc<dyn GameDataProvider>,
    cases: Vec<TestCase>,
    options: RenderOptions,
    timeout: Duration,
    status_tx: watch::Sender<String>,
) -> Result<String> {
    let total = cases.len();
    let handles: Vec<(String, JoinHandle<BoardResult<String>>)> = cases
        .into_iter()
        .map(|case| {
            let name = case.name.clone();
            let handle = tokio::spawn(build_test(Arc::clone(&provider), case, options.clone()));
            (name, handle)
        })
        .collect();

    let mut output = String::new();
    let mut pending = handles.into_iter();
    let mut idx = 0;

    while let Some((name, mut handle)) = pending.next() {
        idx += 1;
        send_status(&status_tx, idx, total, format!("preparing \"{name}\""));

        let result = match tokio::time::timeout(timeout, &mut handle).await {
            Ok(Ok(Ok(test))) => Ok(test),
            Ok(Ok(Err(err))) => Err(anyhow::Error::new(err)),
            Ok(Err(join_err)) => Err(anyhow!("task panicked or was cancelled: {join_err}")),
            Err(_) => {
                handle.abort();
                Err(anyhow!("timed out after {:?}", timeout))
            }
        };

        match result {
            Ok(test) => {
                debug!("Test {} built ({} bytes)", name, test.len());
                output.push_str(&test);
                send_status(&status_tx, idx, total, format!("finished \"{name}\""));
            }
            Err(err) => {
                for (_, handle) in pending {
                    handle.abort();
                }
                send_status(&status_tx, idx, total, format!("failed \"{name}\""));
                return Err(err).with_context(|| format!("Failed to build test \"{name}\""));
            }
        }
    }

    info!("Built {} test(s)", total);
    Ok(output)
}

/// Log the latest batch status until the sender goes away.
pub async fn log_progress(mut status_rx: watch::Receiver<String>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    let mut last = String::new();
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if !last.is_empty() {
                    info!("Status: {}", last);
                }
            }
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                last = status_rx.borrow().clone();
            }
        }
    }
}
