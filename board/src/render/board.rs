use super::snake::SnakeRenderer;
use super::traits::GlyphRenderer;
use super::types::GlyphGrid;
use crate::labels::Labels;
use common::{BoardError, BoardResult, FrameState};

pub struct BoardRenderer<R: GlyphRenderer> {
    renderer: R,
}

impl<R: GlyphRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Lay out food and live snakes. Later writes win when cells overlap.
    pub fn render(&self, frame: &FrameState, labels: &Labels) -> BoardResult<GlyphGrid> {
        let mut grid = GlyphGrid::new(
            frame.width as usize,
            frame.height as usize,
            self.renderer.render_empty(),
        );

        // Render food
        for food in &frame.food {
            food.ensure_within(frame.width, frame.height)?;
            grid.set(food.x as usize, food.y as usize, self.renderer.render_food());
        }

        // Render snakes
        for snake in frame.live_snakes() {
            let label = labels.get(&snake.id).ok_or_else(|| {
                BoardError::invalid_input(format!("snake {} has no label", snake.id))
            })?;

            for (i, pos) in snake.body.iter().enumerate() {
                pos.ensure_within(frame.width, frame.height)?;
                let segment = SnakeRenderer::segment(&snake.body, i);
                let glyph = self.renderer.render_snake_segment(segment, label);
                grid.set(pos.x as usize, pos.y as usize, glyph);
            }
        }

        Ok(grid)
    }
}
