use common::{BoardError, BoardResult, EngineFrame};

/// Frame JSON as a double-quoted, escaped string literal, ready to paste into test source.
pub fn render_frame(frame: &EngineFrame) -> BoardResult<String> {
    let json = serde_json::to_string(frame).map_err(|err| {
        BoardError::invalid_input(format!("frame {} is not serializable: {}", frame.turn, err))
    })?;
    Ok(quote(&json))
}

fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(quote(r#"{"a":"b\"c"}"#), r#""{\"a\":\"b\\\"c\"}""#);
    }
}
