//! Wire format between the page and the host.
//!
//! wry exposes a single sink, `window.ipc.postMessage(string)`. Named
//! channels are layered on top: the initialization script installs
//! `window.bridge.messageHandlers.<name>.postMessage(body)` for every
//! registered channel, and each call is serialized as
//! `{"name": <channel>, "body": <any JSON value>}`.

use serde::{Deserialize, Serialize};

/// A message posted by page script on a named channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMessage {
    /// Channel the script posted on.
    pub name: String,
    /// Whatever the script passed to `postMessage`. Only strings are delivered.
    #[serde(default)]
    pub body: serde_json::Value,
}

impl ScriptMessage {
    /// Parse a frame from the raw IPC body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Build a message with a string body.
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: serde_json::Value::String(body.into()),
        }
    }

    /// The body, if the script posted a string.
    pub fn body_str(&self) -> Option<&str> {
        self.body.as_str()
    }

    /// Serialize the frame exactly as the page-side shim would.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

/// Generate the initialization script exposing `channels` to page script.
pub fn bridge_init_script<S: AsRef<str>>(channels: &[S]) -> String {
    let names: Vec<&str> = channels.iter().map(AsRef::as_ref).collect();
    let names_json = serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
(function() {{
    var post = function(name, body) {{
        window.ipc.postMessage(JSON.stringify({{
            name: name,
            body: body === undefined ? null : body
        }}));
    }};
    window.bridge = window.bridge || {{}};
    window.bridge.messageHandlers = window.bridge.messageHandlers || {{}};
    {names_json}.forEach(function(name) {{
        window.bridge.messageHandlers[name] = {{
            postMessage: function(body) {{ post(name, body); }}
        }};
    }});
}})();
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_body() {
        let msg = ScriptMessage::from_json(r#"{"name":"showAlert","body":"open"}"#).unwrap();
        assert_eq!(msg.name, "showAlert");
        assert_eq!(msg.body_str(), Some("open"));
    }

    #[test]
    fn non_string_bodies_parse_but_have_no_text() {
        for raw in [
            r#"{"name":"showAlert","body":42}"#,
            r#"{"name":"showAlert","body":{"open":true}}"#,
            r#"{"name":"showAlert","body":null}"#,
            r#"{"name":"showAlert"}"#,
        ] {
            let msg = ScriptMessage::from_json(raw).unwrap();
            assert_eq!(msg.body_str(), None, "{raw}");
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ScriptMessage::from_json("").is_none());
        assert!(ScriptMessage::from_json("open").is_none());
        assert!(ScriptMessage::from_json(r#"{"body":"open"}"#).is_none());
        assert!(ScriptMessage::from_json(r#""open""#).is_none());
    }

    #[test]
    fn to_json_matches_shim_shape() {
        let raw = ScriptMessage::text("showAlert", "open").to_json();
        assert_eq!(raw, r#"{"name":"showAlert","body":"open"}"#);
    }

    #[test]
    fn init_script_lists_channels() {
        let script = bridge_init_script(&["showAlert"]);
        assert!(script.contains(r#"["showAlert"]"#));
        assert!(script.contains("window.ipc.postMessage"));
        assert!(script.contains("window.bridge.messageHandlers"));
    }

    #[test]
    fn init_script_escapes_channel_names() {
        let script = bridge_init_script(&["a\"b"]);
        assert!(script.contains(r#"["a\"b"]"#));
    }
}
