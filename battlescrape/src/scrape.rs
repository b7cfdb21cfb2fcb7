use board::{RenderOptions, render_board, render_frame};
use common::{BoardResult, FrameState, GameInfo};
use tracing::debug;

use crate::provider::GameDataProvider;

/// Everything produced for one turn of one game.
#[derive(Debug, Clone)]
pub struct Scrape {
    pub game: GameInfo,
    pub board: String,
    pub frame_string: String,
}

/// Fetch a game and one of its frames, then render both outputs.
pub async fn scrape<P>(
    provider: &P,
    game_id: &str,
    turn: u32,
    options: &RenderOptions,
) -> BoardResult<Scrape>
where
    P: GameDataProvider + ?Sized,
{
    let (game, frame) = tokio::try_join!(provider.game(game_id), provider.frame(game_id, turn))?;
    debug!(
        "Fetched game {} ({}x{}) turn {} with {} snake(s)",
        game.id,
        game.width,
        game.height,
        frame.turn,
        frame.snakes.len()
    );

    let state = FrameState::from_engine(&frame, &game)?;
    let board = render_board(&state, &game, options)?;
    let frame_string = render_frame(&frame)?;

    Ok(Scrape {
        game,
        board,
        frame_string,
    })
}
