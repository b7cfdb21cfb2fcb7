use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Position;

// Payloads of the Battlesnake engine API. Fields the renderer does not read are
// kept in `extra` so a frame serializes back with everything the engine sent.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EngineGameResponse {
    pub game: EngineGame,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EngineGame {
    #[serde(rename = "ID")]
    pub id: String,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EngineFramesResponse {
    #[serde(default)]
    pub frames: Vec<EngineFrame>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EngineFrame {
    pub turn: u32,
    #[serde(default)]
    pub snakes: Vec<EngineSnake>,
    #[serde(default)]
    pub food: Vec<EngineCoord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EngineSnake {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub health: u32,
    pub body: Vec<EngineCoord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
    #[serde(default)]
    pub death: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct EngineCoord {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl From<EngineCoord> for Position {
    fn from(coord: EngineCoord) -> Self {
        Position::new(coord.x, coord.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAMES_JSON: &str = r##"{
        "Frames": [{
            "Turn": 5,
            "Snakes": [{
                "ID": "gs_abc123",
                "Name": "Alice",
                "URL": "",
                "Body": [{"X": 1, "Y": 1}, {"X": 1, "Y": 0}],
                "Health": 98,
                "Death": null,
                "Color": "#ff0000",
                "Shout": ""
            }, {
                "ID": "gs_def456",
                "Name": "Bob",
                "Body": [{"X": 4, "Y": 4}],
                "Health": 0,
                "Death": {"Cause": "wall-collision", "Turn": 3}
            }],
            "Food": [{"X": 3, "Y": 3}],
            "Hazards": []
        }]
    }"##;

    #[test]
    fn decodes_frames_payload() {
        let response: EngineFramesResponse = serde_json::from_str(FRAMES_JSON).unwrap();
        assert_eq!(response.frames.len(), 1);

        let frame = &response.frames[0];
        assert_eq!(frame.turn, 5);
        assert_eq!(frame.food, vec![EngineCoord { x: 3, y: 3 }]);
        assert!(frame.extra.contains_key("Hazards"));

        let alice = &frame.snakes[0];
        assert_eq!(alice.name.as_deref(), Some("Alice"));
        assert_eq!(alice.shout.as_deref(), Some(""));
        assert!(alice.death.is_none());
        assert_eq!(alice.extra.get("Color"), Some(&Value::from("#ff0000")));

        let bob = &frame.snakes[1];
        assert!(bob.death.is_some());
        assert!(bob.shout.is_none());
    }

    #[test]
    fn decodes_game_payload() {
        let json = r#"{"Game": {"ID": "g-1", "Width": 11, "Height": 7, "Status": "complete"}, "LastFrame": {}}"#;
        let response: EngineGameResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.game.id, "g-1");
        assert_eq!((response.game.width, response.game.height), (11, 7));
    }
}
