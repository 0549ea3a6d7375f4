//! Data models
//!
//! Rust structs for persisted thoughts, incoming submissions, and the
//! JSON envelopes returned by the API.

use crate::config::MAX_NAME_CHARS;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Category tag attached to every thought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Inspiration,
    Build,
    Research,
    Collaboration,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Inspiration,
        Theme::Build,
        Theme::Research,
        Theme::Collaboration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Inspiration => "inspiration",
            Theme::Build => "build",
            Theme::Research => "research",
            Theme::Collaboration => "collaboration",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(value: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Theme for a submitted value; anything but a known string is the default
    pub fn from_submitted(value: Option<&Value>) -> Theme {
        value
            .and_then(Value::as_str)
            .and_then(Theme::parse)
            .unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visitor note as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thought {
    pub name: String,
    pub text: String,
    pub theme: Theme,
    /// Acceptance time in milliseconds since the Unix epoch
    pub ts: i64,
}

/// One entry of the stored collection.
///
/// Entries that do not match the [`Thought`] shape are kept verbatim, so a
/// single odd record never costs the rest of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredItem {
    Thought(Thought),
    Raw(Value),
}

impl StoredItem {
    pub fn as_thought(&self) -> Option<&Thought> {
        match self {
            StoredItem::Thought(thought) => Some(thought),
            StoredItem::Raw(_) => None,
        }
    }
}

impl From<Thought> for StoredItem {
    fn from(thought: Thought) -> Self {
        StoredItem::Thought(thought)
    }
}

/// On-disk document: `{"items": [...]}`
///
/// Unknown top-level fields are kept so a rewrite does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThoughtsFile {
    pub items: Vec<StoredItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A submission after string coercion and trimming, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedThought {
    pub name: String,
    pub text: String,
    pub theme: Theme,
}

impl SubmittedThought {
    /// Parse a raw request body.
    ///
    /// An empty body reads as `{}`. Valid JSON that is not an object is
    /// treated as an object with no fields.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = if body.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?
        };

        let empty = Map::new();
        let fields = value.as_object().unwrap_or(&empty);

        let name: String = coerce_text(fields.get("name"))
            .trim()
            .chars()
            .take(MAX_NAME_CHARS)
            .collect();
        let text = coerce_text(fields.get("text")).trim().to_string();

        Ok(Self {
            name,
            text,
            theme: Theme::from_submitted(fields.get("theme")),
        })
    }
}

/// Loose string coercion for submitted fields.
///
/// Missing, `null`, `false`, `0` and `""` become empty. Everything else is
/// rendered the way a browser would stringify it (see [`display_text`]).
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => display_text(other),
    }
}

/// Script-style stringification: arrays join their elements with `,`
/// (nulls as empty), objects become `[object Object]`, and integral
/// floats drop their fraction.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// `GET` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ThoughtList {
    pub items: Vec<StoredItem>,
}

/// `POST` success body
#[derive(Debug, Serialize, Deserialize)]
pub struct ThoughtCreated {
    pub ok: bool,
    pub item: Thought,
}

/// Bare acknowledgement, used for preflight responses
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_parse_is_exact() {
        assert_eq!(Theme::parse("build"), Some(Theme::Build));
        assert_eq!(Theme::parse("collaboration"), Some(Theme::Collaboration));
        assert_eq!(Theme::parse("Build"), None);
        assert_eq!(Theme::parse(" research"), None);
    }

    #[test]
    fn test_theme_defaults_to_inspiration() {
        assert_eq!(Theme::from_submitted(None), Theme::Inspiration);
        assert_eq!(
            Theme::from_submitted(Some(&json!("gardening"))),
            Theme::Inspiration
        );
        assert_eq!(Theme::from_submitted(Some(&json!(3))), Theme::Inspiration);
        assert_eq!(
            Theme::from_submitted(Some(&json!("research"))),
            Theme::Research
        );
    }

    #[test]
    fn test_submission_trims_and_truncates_name() {
        let long_name = format!("  {}  ", "n".repeat(120));
        let body = json!({ "name": long_name, "text": "  some words here  " }).to_string();

        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();

        assert_eq!(submitted.name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(submitted.text, "some words here");
        assert_eq!(submitted.theme, Theme::Inspiration);
    }

    #[test]
    fn test_submission_coerces_non_strings() {
        let body = json!({ "name": 42, "text": true, "theme": "build" }).to_string();
        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();

        assert_eq!(submitted.name, "42");
        assert_eq!(submitted.text, "true");
        assert_eq!(submitted.theme, Theme::Build);

        let body = json!({ "name": null, "text": 0 }).to_string();
        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();
        assert_eq!(submitted.name, "");
        assert_eq!(submitted.text, "");
    }

    #[test]
    fn test_submission_stringifies_like_a_browser() {
        let body = json!({ "name": ["a", "b"], "text": { "k": 1 } }).to_string();
        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();
        assert_eq!(submitted.name, "a,b");
        assert_eq!(submitted.text, "[object Object]");

        let body = json!({ "name": [1, null, [2, 3]], "text": 1.0 }).to_string();
        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();
        assert_eq!(submitted.name, "1,,2,3");
        assert_eq!(submitted.text, "1");

        let body = json!({ "name": 2.5, "text": [] }).to_string();
        let submitted = SubmittedThought::from_body(body.as_bytes()).unwrap();
        assert_eq!(submitted.name, "2.5");
        assert_eq!(submitted.text, "");
    }

    #[test]
    fn test_odd_entries_kept_verbatim() {
        let raw = r#"{"items":[
            {"name":"","text":"hello there friends","theme":"build","ts":1},
            {"name":"x","text":"fractional time","theme":"build","ts":2.5},
            {"name":"y","text":"unknown theme here","theme":"music","ts":3}
        ]}"#;
        let file: ThoughtsFile = serde_json::from_str(raw).unwrap();

        assert_eq!(file.items.len(), 3);
        assert!(file.items[0].as_thought().is_some());
        assert!(file.items[1].as_thought().is_none());
        assert!(file.items[2].as_thought().is_none());

        let round = serde_json::to_value(&file).unwrap();
        assert_eq!(round["items"][1]["ts"], json!(2.5));
        assert_eq!(round["items"][2]["theme"], json!("music"));
    }

    #[test]
    fn test_empty_and_non_object_bodies() {
        let empty = SubmittedThought::from_body(b"").unwrap();
        assert_eq!(empty.text, "");

        let array = SubmittedThought::from_body(b"[1, 2]").unwrap();
        assert_eq!(array.name, "");
        assert_eq!(array.text, "");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = SubmittedThought::from_body(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidJson));
    }

    #[test]
    fn test_thoughts_file_keeps_unknown_fields() {
        let raw = r#"{"items":[{"name":"","text":"hello there friends","theme":"build","ts":1}],"version":2}"#;
        let file: ThoughtsFile = serde_json::from_str(raw).unwrap();

        assert_eq!(file.items.len(), 1);
        assert_eq!(file.extra.get("version"), Some(&json!(2)));

        let round = serde_json::to_value(&file).unwrap();
        assert_eq!(round["version"], json!(2));
        assert_eq!(round["items"][0]["theme"], json!("build"));
    }

    #[test]
    fn test_thoughts_file_requires_items_array() {
        assert!(serde_json::from_str::<ThoughtsFile>(r#"{"other":[]}"#).is_err());
        assert!(serde_json::from_str::<ThoughtsFile>(r#"{"items":{}}"#).is_err());
        assert!(serde_json::from_str::<ThoughtsFile>("[]").is_err());
    }
}
