use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while fetching or rendering a frame.
///
/// Every variant is fatal: a board is either rendered completely or not at all.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The data provider was unreachable or returned a payload that could not be decoded.
    #[error("transport error: {context}")]
    Transport {
        context: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The frame or its snakes cannot be rendered as given.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A food or body position lies outside the declared board.
    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl BoardError {
    pub fn transport(context: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        BoardError::Transport {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    pub fn transport_msg(context: impl Into<String>) -> Self {
        BoardError::Transport {
            context: context.into(),
            source: None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        BoardError::InvalidInput(message.into())
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
