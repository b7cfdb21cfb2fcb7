/// Default Battlesnake engine API used to fetch games and frames
pub const DEFAULT_ENGINE_URL: &str = "https://engine.battlesnake.com";

/// Default board viewer used for the share link in rendered boards
pub const DEFAULT_BOARD_URL: &str = "https://board.battlesnake.com";

/// Display name substituted for snakes that report a blank name
pub const UNKNOWN_SNAKE_NAME: &str = "UNKNOWN";

/// Number of trailing id characters used to disambiguate snakes sharing a name
pub const SNAKE_ID_SUFFIX_LEN: usize = 6;
