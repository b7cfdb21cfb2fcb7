use super::snake::Segment;
use super::types::Glyph;

pub trait GlyphRenderer {
    /// `label` is the snake's upper-case label.
    fn render_snake_segment(&self, segment: Segment, label: char) -> Glyph;

    fn render_food(&self) -> Glyph;

    fn render_empty(&self) -> Glyph;
}
