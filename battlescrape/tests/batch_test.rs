use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use battlescrape::testgen::TestCase;
use battlescrape::{GameDataProvider, StaticProvider, kotlin_test, parse_cases, run_batch, scrape};
use board::{FormatOption, RenderOptions};
use common::{BoardError, BoardResult, EngineFrame, EngineFramesResponse, GameInfo};
use tokio::sync::watch;

const FRAMES_JSON: &str = r#"{"Frames": [
    {
        "Turn": 0,
        "Snakes": [
            {"ID": "gs_aaaaaa111111", "Name": "Alice", "Health": 100,
             "Body": [{"X": 1, "Y": 1}, {"X": 1, "Y": 1}, {"X": 1, "Y": 1}], "Death": null},
            {"ID": "gs_bbbbbb222222", "Name": "", "Health": 100,
             "Body": [{"X": 3, "Y": 3}, {"X": 3, "Y": 3}, {"X": 3, "Y": 3}], "Death": null}
        ],
        "Food": [{"X": 0, "Y": 4}],
        "Hazards": []
    },
    {
        "Turn": 1,
        "Snakes": [
            {"ID": "gs_aaaaaa111111", "Name": "Alice", "Health": 99,
             "Body": [{"X": 1, "Y": 2}, {"X": 1, "Y": 1}, {"X": 1, "Y": 1}], "Death": null,
             "Shout": "up we go"},
            {"ID": "gs_bbbbbb222222", "Name": "", "Health": 99,
             "Body": [{"X": 4, "Y": 3}, {"X": 3, "Y": 3}, {"X": 3, "Y": 3}], "Death": null}
        ],
        "Food": [{"X": 0, "Y": 4}],
        "Hazards": []
    }
]}"#;

fn provider() -> StaticProvider {
    let response: EngineFramesResponse = serde_json::from_str(FRAMES_JSON).unwrap();
    let mut provider = StaticProvider::new();
    provider.insert(
        GameInfo {
            id: "game-1".to_string(),
            width: 5,
            height: 5,
        },
        response.frames,
    );
    provider
}

fn case(name: &str, turn: u32) -> TestCase {
    TestCase {
        name: name.to_string(),
        game_id: "game-1".to_string(),
        turn,
        player: "Alice".to_string(),
        moves: vec!["up".to_string(), "left".to_string()],
    }
}

#[tokio::test]
async fn test_scrape_renders_board_and_frame() {
    let scraped = scrape(&provider(), "game-1", 1, &RenderOptions::default())
        .await
        .unwrap();

    let expected = [
        "https://board.battlesnake.com/?engine=https%3A//engine.battlesnake.com&game=game-1&turn=1",
        "% . . . .  Turn 1",
        ". . . u U ",
        ". A . . .  A: Alice (99) <3> \"up we go\"",
        ". a . . .  U: UNKNOWN (99) <3> ",
        ". . . . . ",
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect::<String>();

    assert_eq!(scraped.board, expected);
    assert!(scraped.frame_string.starts_with("\"{\\\"Turn\\\":1,"));
    assert_eq!(scraped.game.width, 5);
}

#[tokio::test]
async fn test_unknown_turn_is_a_transport_error() {
    let result = scrape(&provider(), "game-1", 7, &RenderOptions::default()).await;
    assert!(matches!(result, Err(BoardError::Transport { .. })));
}

#[tokio::test]
async fn test_kotlin_template() {
    let options = RenderOptions::new(FormatOption::Java);
    let scraped = scrape(&provider(), "game-1", 0, &options).await.unwrap();
    let test = kotlin_test(&case("startsStill", 0), &scraped);

    assert!(test.starts_with("\n/**\n * https://board.battlesnake.com/"));
    assert!(test.contains(" */\n\n@Test\nfun startsStill() {\n    val frameString = \"{"));
    assert!(test.ends_with(
        "    assertMove(frameString, \"Alice\", listOf(\"up\", \"left\"), boardWidth = 5, boardHeight = 5)\n}\n\n"
    ));
}

#[test]
fn test_parse_cases() {
    let contents = "\
# name url turn player moves
avoidsWall https://play.battlesnake.com/g/game-1/ 1 Alice up,left

eatsFood game-1 0 Alice down
";
    let cases = parse_cases(contents).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(
        cases[0],
        TestCase {
            name: "avoidsWall".to_string(),
            game_id: "game-1".to_string(),
            turn: 1,
            player: "Alice".to_string(),
            moves: vec!["up".to_string(), "left".to_string()],
        }
    );
    assert_eq!(cases[1].moves, vec!["down".to_string()]);
}

#[test]
fn test_parse_cases_rejects_bad_lines() {
    assert!(matches!(
        parse_cases("onlyName https://play.battlesnake.com/g/x/"),
        Err(BoardError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_cases("t https://play.battlesnake.com/g/x/ soon Alice up"),
        Err(BoardError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_batch_keeps_file_order() {
    let provider: Arc<dyn GameDataProvider> = Arc::new(provider());
    let (status_tx, status_rx) = watch::channel(String::new());

    let output = run_batch(
        provider,
        vec![case("second", 1), case("first", 0)],
        RenderOptions::new(FormatOption::Java),
        Duration::from_secs(5),
        status_tx,
    )
    .await
    .unwrap();

    let second = output.find("fun second()").unwrap();
    let first = output.find("fun first()").unwrap();
    assert!(second < first);
    assert_eq!(*status_rx.borrow(), "test 2/2: finished \"first\"");
}

#[tokio::test]
async fn test_batch_stops_on_failure() {
    let provider: Arc<dyn GameDataProvider> = Arc::new(provider());
    let (status_tx, _status_rx) = watch::channel(String::new());

    let err = run_batch(
        provider,
        vec![case("ok", 0), case("missing", 42)],
        RenderOptions::default(),
        Duration::from_secs(5),
        status_tx,
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("missing"));
    assert!(err.downcast_ref::<BoardError>().is_some());
}

struct StalledProvider;

#[async_trait]
impl GameDataProvider for StalledProvider {
    async fn game(&self, _game_id: &str) -> BoardResult<GameInfo> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(BoardError::transport_msg("unreachable"))
    }

    async fn frame(&self, _game_id: &str, _turn: u32) -> BoardResult<EngineFrame> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(BoardError::transport_msg("unreachable"))
    }
}

#[tokio::test]
async fn test_batch_times_out() {
    let provider: Arc<dyn GameDataProvider> = Arc::new(StalledProvider);
    let (status_tx, _status_rx) = watch::channel(String::new());

    let err = run_batch(
        provider,
        vec![case("stalled", 0)],
        RenderOptions::default(),
        Duration::from_millis(50),
        status_tx,
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("timed out"));
}
