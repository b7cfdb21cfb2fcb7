use common::{BoardError, BoardResult};
use url::Url;

/// Extract the game id from a `https://play.<host>/g/<id>/` link. A bare id is accepted as is.
pub fn parse_game_id(raw: &str) -> BoardResult<String> {
    let raw = raw.trim();
    let invalid = || BoardError::invalid_input(format!("not a game URL or id: {raw:?}"));

    let Ok(url) = Url::parse(raw) else {
        let bare = !raw.is_empty()
            && !raw.contains(['/', '?', '#'])
            && !raw.contains(char::is_whitespace);
        return if bare { Ok(raw.to_string()) } else { Err(invalid()) };
    };

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if !url.host_str().is_some_and(|host| host.starts_with("play.")) {
        return Err(invalid());
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    match segments.as_slice() {
        ["g", id] => Ok(id.to_string()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_links() {
        let url = "https://play.battlesnake.com/g/746f9c99-1360-45da-878c-2ee0b6bc435a/";
        assert_eq!(parse_game_id(url).unwrap(), "746f9c99-1360-45da-878c-2ee0b6bc435a");
        assert_eq!(parse_game_id("https://play.battlesnake.com/g/abc").unwrap(), "abc");
        assert_eq!(parse_game_id(" http://play.example.org/g/xyz/ ").unwrap(), "xyz");
    }

    #[test]
    fn bare_ids() {
        assert_eq!(parse_game_id("746f9c99-1360").unwrap(), "746f9c99-1360");
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in [
            "",
            "https://engine.battlesnake.com/g/abc/",
            "https://play.battlesnake.com/games/abc/",
            "https://play.battlesnake.com/g/",
            "https://play.battlesnake.com/g/abc/extra",
            "ftp://play.battlesnake.com/g/abc/",
            "some/path",
        ] {
            assert!(
                matches!(parse_game_id(raw), Err(BoardError::InvalidInput(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
