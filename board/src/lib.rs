pub mod format;
pub mod frame_string;
pub mod labels;
pub mod render;

use common::{BoardResult, FrameState, GameInfo};
use tracing::debug;

pub use format::{format_board, share_url};
pub use frame_string::render_frame;
pub use labels::{assign_labels, Labels};
pub use render::types::{FormatOption, RenderOptions};

use render::board::BoardRenderer;
use render::standard_renderer::StandardRenderer;

/// Label the live snakes, lay out the board and format it.
pub fn render_board(
    frame: &FrameState,
    game: &GameInfo,
    options: &RenderOptions,
) -> BoardResult<String> {
    let labels = assign_labels(frame.live_snakes())?;
    debug!(
        "Rendering game {} turn {} with {} live snake(s)",
        game.id,
        frame.turn,
        labels.len()
    );

    let grid = BoardRenderer::new(StandardRenderer::new()).render(frame, &labels)?;
    format_board(&grid, frame, &labels, &game.id, options)
}
