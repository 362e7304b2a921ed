//! Custom serde deserializers for the registry's loosely shaped fields.
//!
//! Public registry records are hand-edited `package.json` data at heart, so
//! any field can show up with a surprising shape. These helpers parse the
//! raw JSON value and degrade anything unexpected to an empty contribution,
//! keeping a single malformed field from failing the whole record.

use super::package::{Author, Maintainer};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes the `author` field into its tagged form.
///
/// # Shapes accepted
/// - A JSON object becomes [`Author::Structured`], keeping `name` and
///   `email` when they are strings.
/// - A JSON string becomes [`Author::Text`], preserved verbatim.
/// - Anything else (null, numbers, arrays) becomes `None`.
///
/// # Examples
/// ```text
/// Input:  {"name": "Jane", "email": "jane@example.com"}
/// Output: Some(Structured { name: Some("Jane"), email: Some("jane@example.com") })
///
/// Input:  "Jane Doe <jane@example.com>"
/// Output: Some(Text("Jane Doe <jane@example.com>"))
///
/// Input:  42
/// Output: None
/// ```
pub fn author_or_none<'de, D>(deserializer: D) -> Result<Option<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => Some(Author::Text(raw)),
        Value::Object(fields) => Some(Author::Structured {
            name: string_field(&fields, "name"),
            email: string_field(&fields, "email"),
        }),
        _ => None,
    })
}

/// Deserializes the `maintainers` list, skipping entries that are not
/// objects.
///
/// A `maintainers` value that is not a list at all reads as an empty list.
/// Within an entry, `name` and `email` are kept only when they are strings;
/// a maintainer without an email is a valid entry that simply carries no
/// contact.
pub fn maintainers_or_empty<'de, D>(deserializer: D) -> Result<Vec<Maintainer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(fields) => Some(Maintainer {
                name: string_field(fields, "name"),
                email: string_field(fields, "email"),
            }),
            _ => None,
        })
        .collect())
}

/// Deserializes a field as `Some(String)` only when it is a JSON string.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Deserializes a map of string values, dropping non-string entries.
///
/// Used for `dist-tags`, where each tag should map to a version string.
pub fn string_map_or_empty<'de, D>(
    deserializer: D,
) -> Result<std::collections::HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(fields) = value else {
        return Ok(std::collections::HashMap::new());
    };

    Ok(fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect())
}

/// Deserializes `downloads` down to its `weekly` count.
///
/// # Examples
/// ```text
/// Input:  {"weekly": 1200, "monthly": 5000}
/// Output: 1200
///
/// Input:  "unavailable"
/// Output: 0
/// ```
pub fn weekly_downloads<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.get("weekly").and_then(Value::as_u64).unwrap_or(0))
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}
