use common::{BoardError, BoardResult, FrameState, SnakeState};

use crate::labels::Labels;
use crate::render::types::{GlyphGrid, RenderOptions};

/// Line (counted from the top) where the first snake info line goes.
const FIRST_SNAKE_LINE: usize = 2;

/// Link that opens the game at this turn in the board viewer.
pub fn share_url(options: &RenderOptions, game_id: &str, turn: u32) -> String {
    format!(
        "{}/?engine={}&game={}&turn={}",
        options.board_url.trim_end_matches('/'),
        options.engine_url.replace(':', "%3A"),
        game_id,
        turn
    )
}

fn display_name(snake: &SnakeState, live: &[&SnakeState]) -> String {
    let shared = live
        .iter()
        .any(|other| other.id != snake.id && other.name == snake.name);
    if shared {
        format!("{}/{}", snake.name, snake.id_suffix())
    } else {
        snake.name.clone()
    }
}

fn snake_info(snake: &SnakeState, label: char, live: &[&SnakeState]) -> String {
    let shout = snake
        .shout()
        .map(|shout| format!("\"{}\"", shout))
        .unwrap_or_default();
    format!(
        " {}: {} ({}) <{}> {}",
        label,
        display_name(snake, live),
        snake.health,
        snake.len(),
        shout
    )
}

/// Serialize a laid-out board with its share link, turn and snake info.
///
/// Every live snake listed next to the board needs a label.
///
/// ```text
/// https://board.battlesnake.com/?engine=https%3A//engine.battlesnake.com&game=game-1&turn=5
/// . . . .  Turn 5
/// . . B .
/// a A ╚═b  A: Alice (100) <4>
/// ╚═╝ . %  B: Bob (85) <3> "hi"
/// ```
pub fn format_board(
    grid: &GlyphGrid,
    frame: &FrameState,
    labels: &Labels,
    game_id: &str,
    options: &RenderOptions,
) -> BoardResult<String> {
    let format = options.format;
    let prefix = format.line_prefix();
    let live: Vec<&SnakeState> = frame.live_snakes().collect();
    let mut out = String::new();

    if let Some(start) = format.comment_start() {
        out.push_str(start);
        out.push('\n');
    }

    out.push_str(prefix);
    out.push_str(&share_url(options, game_id, frame.turn));
    out.push('\n');

    for (line, row) in grid.lines().into_iter().enumerate() {
        out.push_str(prefix);
        out.push_str(&row);

        if line == 0 {
            out.push_str(&format!(" Turn {}", frame.turn));
        } else if let Some(snake) = line
            .checked_sub(FIRST_SNAKE_LINE)
            .and_then(|idx| live.get(idx))
        {
            let label = labels.get(&snake.id).ok_or_else(|| {
                BoardError::invalid_input(format!("snake {} has no label", snake.id))
            })?;
            out.push_str(&snake_info(snake, label, &live));
        }

        out.push('\n');
    }

    if let Some(end) = format.comment_end() {
        out.push_str(end);
    }

    Ok(out)
}
