use super::snake::{Corner, Segment};
use super::traits::GlyphRenderer;
use super::types::Glyph;

pub const EMPTY: Glyph = Glyph::new('.', ' ');
pub const FOOD: Glyph = Glyph::new('%', ' ');
pub const VERTICAL: Glyph = Glyph::new('║', ' ');
pub const HORIZONTAL: Glyph = Glyph::new('═', '═');

const CONNECTOR: char = '═';

/// Box-drawing glyphs: upper-case label for heads, lower-case for tails.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRenderer;

impl StandardRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn end_glyph(label: char, connects_right: bool) -> Glyph {
    Glyph::new(label, if connects_right { CONNECTOR } else { ' ' })
}

impl GlyphRenderer for StandardRenderer {
    fn render_snake_segment(&self, segment: Segment, label: char) -> Glyph {
        match segment {
            Segment::Head { connects_right } => {
                let head = label.to_uppercase().next().unwrap_or(label);
                end_glyph(head, connects_right)
            }
            Segment::Tail { connects_right } => {
                let tail = label.to_lowercase().next().unwrap_or(label);
                end_glyph(tail, connects_right)
            }
            Segment::Vertical => VERTICAL,
            Segment::Horizontal => HORIZONTAL,
            Segment::Corner(Corner::UpRight) => Glyph::new('╚', '═'),
            Segment::Corner(Corner::DownRight) => Glyph::new('╔', '═'),
            Segment::Corner(Corner::DownLeft) => Glyph::new('╗', ' '),
            Segment::Corner(Corner::UpLeft) => Glyph::new('╝', ' '),
        }
    }

    fn render_food(&self) -> Glyph {
        FOOD
    }

    fn render_empty(&self) -> Glyph {
        EMPTY
    }
}
