use std::fmt;

use common::{DEFAULT_BOARD_URL, DEFAULT_ENGINE_URL};

/// Comment decoration wrapped around a rendered board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatOption {
    #[default]
    None,
    /// `/** ... */` block with ` * ` line prefixes.
    Java,
    /// Triple-quoted string block.
    Python,
}

impl FormatOption {
    pub fn comment_start(&self) -> Option<&'static str> {
        match self {
            FormatOption::None => None,
            FormatOption::Java => Some("\n/**"),
            FormatOption::Python => Some("\n\"\"\""),
        }
    }

    pub fn line_prefix(&self) -> &'static str {
        match self {
            FormatOption::Java => " * ",
            FormatOption::None | FormatOption::Python => "",
        }
    }

    pub fn comment_end(&self) -> Option<&'static str> {
        match self {
            FormatOption::None => None,
            FormatOption::Java => Some(" */\n"),
            FormatOption::Python => Some("\"\"\"\n"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: FormatOption,
    /// Board viewer the share link points at.
    pub board_url: String,
    /// Engine the board viewer should load the game from.
    pub engine_url: String,
}

impl RenderOptions {
    pub fn new(format: FormatOption) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: FormatOption::None,
            board_url: DEFAULT_BOARD_URL.to_string(),
            engine_url: DEFAULT_ENGINE_URL.to_string(),
        }
    }
}

/// Two characters occupying one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph(pub [char; 2]);

impl Glyph {
    pub const fn new(first: char, second: char) -> Self {
        Glyph([first, second])
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Board cells indexed by `(row, col)` with row 0 at the bottom.
pub struct GlyphGrid {
    grid: Vec<Vec<Glyph>>,
    width: usize,
    height: usize,
}

impl GlyphGrid {
    pub fn new(width: usize, height: usize, fill: Glyph) -> Self {
        let grid = vec![vec![fill; width]; height];
        Self { grid, width, height }
    }

    pub fn set(&mut self, x: usize, y: usize, glyph: Glyph) {
        if let Some(row) = self.grid.get_mut(y) {
            if let Some(cell) = row.get_mut(x) {
                *cell = glyph;
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Glyph> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows as text, top row first.
    pub fn lines(&self) -> Vec<String> {
        self.grid
            .iter()
            .rev()
            .map(|row| row.iter().map(Glyph::to_string).collect())
            .collect()
    }
}
