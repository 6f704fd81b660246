//! Author record as published in registry metadata

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// npm person shorthand: `Name <email> (url)`, every part optional
static PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^<(]+?)?[ \t]*(?:<([^>(]+?)>)?[ \t]*(?:\(([^)]+?)\)|$)")
        .expect("person pattern is a valid regex")
});

/// Free-text author metadata. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AuthorRecord {
    pub fn new(name: Option<&str>, email: Option<&str>, url: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    /// Parses the `Name <email> (url)` shorthand.
    /// A string the pattern cannot split becomes the name as a whole.
    pub fn parse_person(text: &str) -> Self {
        let text = text.trim();
        let Some(caps) = PERSON_RE.captures(text) else {
            return Self {
                name: non_empty(text),
                ..Self::default()
            };
        };

        let part = |i: usize| caps.get(i).and_then(|m| non_empty(m.as_str()));
        Self {
            name: part(1),
            email: part(2),
            url: part(3),
        }
    }

    /// Builds a record from either person form.
    ///
    /// Returns `None` for values that are neither a string nor an object.
    /// Non-string or empty fields inside an object are treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::parse_person(text)),
            Value::Object(map) => {
                let field = |key: &str| map.get(key).and_then(Value::as_str).and_then(non_empty);
                Some(Self {
                    name: field("name"),
                    email: field("email"),
                    url: field("url"),
                })
            }
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for AuthorRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a person string or object"))
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(
        "Barney Rubble <b@rubble.com> (http://barnyrubble.tumblr.com/)",
        AuthorRecord::new(Some("Barney Rubble"), Some("b@rubble.com"), Some("http://barnyrubble.tumblr.com/"))
    )]
    #[case("Barney Rubble", AuthorRecord::new(Some("Barney Rubble"), None, None))]
    #[case("Barney <b@rubble.com>", AuthorRecord::new(Some("Barney"), Some("b@rubble.com"), None))]
    #[case(
        "Barney (https://github.com/barney)",
        AuthorRecord::new(Some("Barney"), None, Some("https://github.com/barney"))
    )]
    #[case("<b@rubble.com>", AuthorRecord::new(None, Some("b@rubble.com"), None))]
    #[case("   ", AuthorRecord::default())]
    fn parse_person_splits_shorthand(#[case] input: &str, #[case] expected: AuthorRecord) {
        assert_eq!(AuthorRecord::parse_person(input), expected);
    }

    #[test]
    fn parse_person_keeps_unsplittable_text_as_name() {
        let record = AuthorRecord::parse_person("Fred <broken");

        assert_eq!(record.name.as_deref(), Some("Fred <broken"));
        assert_eq!(record.email, None);
    }

    #[test]
    fn from_value_reads_object_fields() {
        let record = AuthorRecord::from_value(&json!({
            "name": "Octo Cat",
            "email": "octo@example.com",
            "url": "https://github.com/octocat"
        }))
        .unwrap();

        assert_eq!(
            record,
            AuthorRecord::new(
                Some("Octo Cat"),
                Some("octo@example.com"),
                Some("https://github.com/octocat")
            )
        );
    }

    #[test]
    fn from_value_treats_non_string_fields_as_absent() {
        let record = AuthorRecord::from_value(&json!({ "name": 42, "email": null })).unwrap();

        assert_eq!(record, AuthorRecord::default());
    }

    #[test]
    fn from_value_treats_blank_fields_as_absent() {
        let record =
            AuthorRecord::from_value(&json!({ "name": "Ann", "email": "", "url": "  " })).unwrap();

        assert_eq!(record, AuthorRecord::new(Some("Ann"), None, None));
    }

    #[test]
    fn from_value_rejects_non_person_values() {
        assert_eq!(AuthorRecord::from_value(&json!(7)), None);
        assert_eq!(AuthorRecord::from_value(&json!(["a"])), None);
    }

    #[test]
    fn deserialize_accepts_string_form() {
        let record: AuthorRecord = serde_json::from_str(r#""Ann <ann@example.com>""#).unwrap();

        assert_eq!(record.email.as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let value = serde_json::to_value(AuthorRecord::new(Some("Ann"), None, None)).unwrap();

        assert_eq!(value, json!({ "name": "Ann" }));
    }
}
