//! Extraction of contact strings from package records.
//!
//! This is the one piece of real logic in the crate: a package record
//! exposes contact-like data in two places with three shapes (structured
//! maintainer entries, a structured author mapping, or a free-text
//! `"Name <email>"` author string), and all of them fold into one
//! deduplicated set.

use crate::models::package::{Author, PackageRecord};
use std::collections::BTreeSet;

/// Deduplicated set of contact strings, as found on the wire.
///
/// No normalization is applied; case and whitespace survive exactly as the
/// registry served them.
pub type ContactSet = BTreeSet<String>;

/// Collects every contact string a record exposes.
///
/// Pure and infallible: absent or malformed fields contribute nothing
/// rather than erroring, and running it twice on the same record yields the
/// same set.
///
/// Sources, in order:
/// 1. Each `maintainers` entry with a non-empty `email`.
/// 2. The `author` field: a structured mapping contributes its non-empty
///    `email`; a free-text form contributes its angle-bracketed substring.
pub fn extract_contacts(record: &PackageRecord) -> ContactSet {
    let mut contacts = ContactSet::new();

    for maintainer in &record.maintainers {
        if let Some(email) = &maintainer.email {
            if !email.is_empty() {
                contacts.insert(email.clone());
            }
        }
    }

    match &record.author {
        Some(Author::Structured { email: Some(email), .. }) if !email.is_empty() => {
            contacts.insert(email.clone());
        }
        Some(Author::Text(raw)) => {
            if let Some(email) = angle_bracketed(raw) {
                contacts.insert(email.to_string());
            }
        }
        _ => {}
    }

    contacts
}

/// Pulls the email candidate out of a free-text `"Name <email>"` author
/// string.
///
/// Deliberately a naive scan, not an address parser: take the first `<` and
/// the first `>` of the whole string and return the non-empty substring
/// strictly between them, if any. Reversed bracketing (`>` before `<`), an
/// unclosed `<`, and empty `<>` all yield nothing. Whatever sits between
/// the brackets is returned unvalidated; the registry's own convention is
/// the only contract here.
///
/// # Examples
/// ```text
/// Input:  "Jane Doe <jane@example.com>"
/// Output: Some("jane@example.com")
///
/// Input:  "Jane Doe (no email)"
/// Output: None
///
/// Input:  "a>b <c>"
/// Output: None
/// ```
fn angle_bracketed(raw: &str) -> Option<&str> {
    let open = raw.find('<')?;
    let close = raw.find('>')?;
    if close > open + 1 {
        Some(&raw[open + 1..close])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> PackageRecord {
        serde_json::from_value(value).expect("record should parse")
    }

    fn contacts(value: serde_json::Value) -> ContactSet {
        extract_contacts(&record(value))
    }

    #[test]
    fn empty_record_yields_empty_set() {
        assert!(contacts(json!({})).is_empty());
    }

    #[test]
    fn maintainer_emails_are_collected() {
        let set = contacts(json!({
            "maintainers": [
                {"name": "a", "email": "a@x.com"},
                {"name": "b", "email": "b@x.com"}
            ]
        }));

        assert!(set.contains("a@x.com"));
        assert!(set.contains("b@x.com"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn maintainer_without_email_contributes_nothing() {
        assert!(contacts(json!({"maintainers": [{"name": "a"}]})).is_empty());
    }

    #[test]
    fn structured_author_email_is_collected() {
        let set = contacts(json!({"author": {"name": "Jane", "email": "jane@example.com"}}));
        assert_eq!(set, ContactSet::from(["jane@example.com".to_string()]));
    }

    #[test]
    fn structured_author_without_email_contributes_nothing() {
        assert!(contacts(json!({"author": {"name": "Jane"}})).is_empty());
    }

    #[test]
    fn text_author_angle_brackets_are_scanned() {
        let set = contacts(json!({"author": "Jane Doe <jane@example.com>"}));
        assert_eq!(set, ContactSet::from(["jane@example.com".to_string()]));
    }

    #[test]
    fn text_author_without_brackets_contributes_nothing() {
        assert!(contacts(json!({"author": "Jane Doe (no email)"})).is_empty());
    }

    #[test]
    fn unclosed_bracket_contributes_nothing() {
        assert!(contacts(json!({"author": "Jane Doe <jane@example.com"})).is_empty());
    }

    #[test]
    fn reversed_brackets_contribute_nothing() {
        assert!(contacts(json!({"author": "a>b <c>"})).is_empty());
    }

    #[test]
    fn empty_brackets_contribute_nothing() {
        assert!(contacts(json!({"author": "Jane <>"})).is_empty());
    }

    #[test]
    fn empty_email_strings_are_dropped() {
        let set = contacts(json!({
            "maintainers": [{"name": "a", "email": ""}],
            "author": {"name": "Jane", "email": ""}
        }));
        assert!(set.is_empty());
    }

    #[test]
    fn unexpected_author_shape_contributes_nothing() {
        assert!(contacts(json!({"author": 42})).is_empty());
    }

    #[test]
    fn duplicates_collapse_across_sources() {
        let set = contacts(json!({
            "maintainers": [
                {"name": "jane", "email": "jane@example.com"},
                {"name": "jane-alt", "email": "jane@example.com"}
            ],
            "author": "Jane Doe <jane@example.com>"
        }));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn case_and_whitespace_are_preserved() {
        let set = contacts(json!({
            "maintainers": [
                {"email": "Jane@Example.com"},
                {"email": "jane@example.com"}
            ]
        }));
        assert_eq!(set.len(), 2);
        assert!(set.contains("Jane@Example.com"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let parsed = record(json!({
            "maintainers": [{"email": "a@x.com"}],
            "author": "B <b@x.com>"
        }));
        assert_eq!(extract_contacts(&parsed), extract_contacts(&parsed));
    }
}
