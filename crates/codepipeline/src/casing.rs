//! Key casing: rewrite identifier keys into the wire's camel-case form.
//!
//! Rules:
//! - Identifiers split into words on `_`/`-` and before every uppercase
//!   letter (an embedded capital starts a new word).
//! - `Lower`: the first word is fully lowercased; each later word gets its
//!   first character uppercased, the remainder untouched.
//! - `Upper`: every word gets its first character uppercased, remainder
//!   untouched.
//! - Opaque (non-identifier) keys pass through verbatim. Pre-cased keys
//!   supplied directly by callers keep their spelling.

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::rules::{CaseMode, CaseRules};
use crate::value::{Key, Value};

/// Rewrite one identifier into camel case. Idempotent: feeding the output
/// back in with the same mode returns it unchanged.
pub fn case_key(key: &str, mode: CaseMode) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in split_words(key).into_iter().enumerate() {
        if i == 0 && mode == CaseMode::Lower {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Split at the start of the string, after each `_`/`-`, and immediately
/// before an uppercase letter. Separators are dropped, empty words never
/// emitted.
fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c == '_' || c == '-' {
            if i > start {
                words.push(&s[start..i]);
            }
            start = i + c.len_utf8();
        } else if c.is_uppercase() && i > start {
            words.push(&s[start..i]);
            start = i;
        }
    }
    if start < s.len() {
        words.push(&s[start..]);
    }
    words
}

/// Recursively rewrite every map key in a normalized tree, producing the
/// wire-ready `serde_json::Value`.
///
/// Per map entry with an identifier key: the mode comes from
/// `rules.key_overrides` for that exact name, else `rules.default`. If
/// `rules.subkey_rules` names the key, the recursion into its value uses a
/// derived rules copy whose `key_overrides` is swapped for that table
/// (`default` and `subkey_rules` unchanged); the swapped table stays in
/// effect for deeper descendants until another subkey substitution.
/// Opaque keys are kept verbatim and never consult either table.
///
/// List elements are cased independently with the same rules; scalars pass
/// through. Total function, no error conditions.
pub fn apply_casing(value: &Value, rules: &CaseRules) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => JsonValue::Number(n.clone()),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::List(items) => {
            JsonValue::Array(items.iter().map(|item| apply_casing(item, rules)).collect())
        }
        Value::Map(entries) => {
            let mut out = JsonMap::with_capacity(entries.len());
            for (key, child) in entries {
                match key {
                    Key::Opaque(name) => {
                        out.insert(name.clone(), apply_casing(child, rules));
                    }
                    Key::Ident(name) => {
                        let mode = rules
                            .key_overrides
                            .get(name)
                            .copied()
                            .unwrap_or(rules.default);
                        let cased = match rules.subkey_rules.get(name) {
                            Some(table) => {
                                apply_casing(child, &rules.with_overrides(table.clone()))
                            }
                            None => apply_casing(child, rules),
                        };
                        out.insert(case_key(name, mode), cased);
                    }
                }
            }
            JsonValue::Object(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_on_separators_and_capitals() {
        assert_eq!(split_words("action_type_id"), vec!["action", "type", "id"]);
        assert_eq!(split_words("entity-url"), vec!["entity", "url"]);
        assert_eq!(split_words("testThings"), vec!["test", "Things"]);
        assert_eq!(split_words("s3_bucket"), vec!["s3", "bucket"]);
        assert_eq!(split_words("__x"), vec!["x"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn lower_camel() {
        assert_eq!(case_key("test_things", CaseMode::Lower), "testThings");
        assert_eq!(case_key("pipeline", CaseMode::Lower), "pipeline");
        assert_eq!(case_key("entity-url-template", CaseMode::Lower), "entityUrlTemplate");
    }

    #[test]
    fn upper_camel() {
        assert_eq!(case_key("s3_bucket", CaseMode::Upper), "S3Bucket");
        assert_eq!(case_key("poll_for_jobs", CaseMode::Upper), "PollForJobs");
    }

    #[test]
    fn case_key_is_idempotent() {
        let once = case_key("test_things", CaseMode::Lower);
        assert_eq!(case_key(&once, CaseMode::Lower), once);
        let pascal = case_key("acknowledge_third_party_job", CaseMode::Upper);
        assert_eq!(case_key(&pascal, CaseMode::Upper), pascal);
    }
}
