use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardResult};

/// A cell on the board. Origin is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// True when `other` lies in the column directly to the right, at any height.
    pub fn has_right_neighbour(&self, other: &Position) -> bool {
        other.x == self.x + 1
    }

    /// Midpoint of two positions, which is fractional for diagonal pairs.
    pub fn midpoint(a: &Position, b: &Position) -> (f64, f64) {
        (
            (a.x as f64 + b.x as f64) / 2.0,
            (a.y as f64 + b.y as f64) / 2.0,
        )
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < width as i64 && (self.y as i64) < height as i64
    }

    pub fn ensure_within(&self, width: u32, height: u32) -> BoardResult<()> {
        if self.is_within(width, height) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                x: self.x,
                y: self.y,
                width,
                height,
            })
        }
    }
}
