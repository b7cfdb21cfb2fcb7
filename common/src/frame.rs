use log::debug;

use crate::{
    BoardError, BoardResult, EngineFrame, EngineGame, EngineSnake, Position, SNAKE_ID_SUFFIX_LEN,
    UNKNOWN_SNAKE_NAME,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl From<EngineGame> for GameInfo {
    fn from(game: EngineGame) -> Self {
        GameInfo {
            id: game.id,
            width: game.width,
            height: game.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    pub id: String,
    pub name: String,
    pub health: u32,
    /// Head first, tail last.
    pub body: Vec<Position>,
    pub shout: Option<String>,
    pub is_alive: bool,
}

impl SnakeState {
    /// Builds the snake from its engine record, substituting a placeholder for blank names.
    pub fn from_engine(snake: &EngineSnake) -> Self {
        let name = match snake.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => {
                debug!("Snake {} has no name, using {}", snake.id, UNKNOWN_SNAKE_NAME);
                UNKNOWN_SNAKE_NAME.to_string()
            }
        };

        SnakeState {
            id: snake.id.clone(),
            name,
            health: snake.health,
            body: snake.body.iter().copied().map(Position::from).collect(),
            shout: snake.shout.clone(),
            is_alive: snake.death.is_none(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The shout for this turn, if the snake said anything.
    pub fn shout(&self) -> Option<&str> {
        self.shout.as_deref().filter(|shout| !shout.is_empty())
    }

    /// Trailing characters of the id, used when two snakes share a display name.
    pub fn id_suffix(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(SNAKE_ID_SUFFIX_LEN - 1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.id[start..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameState {
    pub turn: u32,
    pub width: u32,
    pub height: u32,
    pub food: Vec<Position>,
    /// Provider order; drives label precedence and the order of info lines.
    pub snakes: Vec<SnakeState>,
}

impl FrameState {
    pub fn from_engine(frame: &EngineFrame, game: &GameInfo) -> BoardResult<Self> {
        if game.width == 0 || game.height == 0 {
            return Err(BoardError::invalid_input(format!(
                "game {} has an empty {}x{} board",
                game.id, game.width, game.height
            )));
        }

        let snakes: Vec<SnakeState> = frame.snakes.iter().map(SnakeState::from_engine).collect();
        if let Some(snake) = snakes.iter().find(|s| s.is_alive && s.is_empty()) {
            return Err(BoardError::invalid_input(format!(
                "snake {} has no body",
                snake.id
            )));
        }

        Ok(FrameState {
            turn: frame.turn,
            width: game.width,
            height: game.height,
            food: frame.food.iter().copied().map(Position::from).collect(),
            snakes,
        })
    }

    pub fn live_snakes(&self) -> impl Iterator<Item = &SnakeState> {
        self.snakes.iter().filter(|snake| snake.is_alive)
    }
}
