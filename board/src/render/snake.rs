use common::Position;

/// Shape of a single body cell, derived from its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// `connects_right` is set when a long snake continues into the next column.
    Head { connects_right: bool },
    Tail { connects_right: bool },
    Vertical,
    Horizontal,
    Corner(Corner),
}

/// Corners named by the two sides they join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

pub struct SnakeRenderer;

impl SnakeRenderer {
    /// Classify the body cell at `index`. `body` is head first and must contain `index`.
    pub fn segment(body: &[Position], index: usize) -> Segment {
        let current = &body[index];
        let last = body.len() - 1;

        if index == 0 {
            // Only the column to the right is checked, a vertical neighbour never connects
            let connects_right = body.len() > 2 && current.has_right_neighbour(&body[1]);
            return Segment::Head { connects_right };
        }

        if index == last {
            let connects_right = body.len() > 2 && current.has_right_neighbour(&body[index - 1]);
            return Segment::Tail { connects_right };
        }

        let prev = &body[index - 1];
        let next = &body[index + 1];

        if prev.x == next.x {
            Segment::Vertical
        } else if prev.y == next.y {
            Segment::Horizontal
        } else {
            // Which side of the prev/next midpoint the cell sits on picks the corner
            let (mid_x, mid_y) = Position::midpoint(prev, next);
            let x = current.x as f64;
            let y = current.y as f64;

            let corner = if x < mid_x && y < mid_y {
                Corner::UpRight
            } else if x < mid_x {
                Corner::DownRight
            } else if y > mid_y {
                Corner::DownLeft
            } else {
                Corner::UpLeft
            };
            Segment::Corner(corner)
        }
    }
}
