//! Caller-facing input shapes and the canonical normalized tree.

use serde_json::Number;

/// A map key. `Ident` keys are word-separated identifiers that the key-caser
/// rewrites into the wire casing; `Opaque` keys are caller-controlled strings
/// that reach the wire verbatim (e.g. the pre-cased keys of an action
/// `configuration` map).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    Ident(String),
    Opaque(String),
}

impl Key {
    pub fn ident(name: impl Into<String>) -> Self {
        Key::Ident(name.into())
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        Key::Opaque(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Ident(s) | Key::Opaque(s) => s,
        }
    }

    /// Classify a string key: identifier-shaped lowercase names become
    /// `Ident`, everything else `Opaque`. Used by the `serde_json::Value`
    /// adapter, where the caller cannot tag keys explicitly.
    pub fn classify(name: &str) -> Self {
        if is_identifier(name) {
            Key::Ident(name.to_string())
        } else {
            Key::Opaque(name.to_string())
        }
    }
}

/// Identifier-shaped: starts with a lowercase ASCII letter or underscore,
/// continues with lowercase letters, digits, underscores, or hyphens.
fn is_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_lowercase() && first != b'_' {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Ident(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Ident(name)
    }
}

/// Structured input as supplied by callers. `Seq` is an ordered sequence
/// whose shape the normalizer classifies: if every element is a `Pair` it
/// folds into a map, otherwise it stays a plain list.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A single `(key, value)` 2-tuple, the element shape of a pair sequence.
    Pair(Key, Box<Input>),
    Seq(Vec<Input>),
    Map(Vec<(Key, Input)>),
}

impl Input {
    /// One `(key, value)` pair. `&str` keys become [`Key::Ident`]; use
    /// [`Key::opaque`] for keys that must not be re-cased.
    pub fn pair(key: impl Into<Key>, value: impl Into<Input>) -> Input {
        Input::Pair(key.into(), Box::new(value.into()))
    }

    /// A pair sequence, the idiomatic way to spell a nested record.
    pub fn pairs<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Input
    where
        K: Into<Key>,
        V: Into<Input>,
    {
        Input::Seq(
            entries
                .into_iter()
                .map(|(k, v)| Input::Pair(k.into(), Box::new(v.into())))
                .collect(),
        )
    }

    /// A plain list.
    pub fn list<V: Into<Input>>(items: impl IntoIterator<Item = V>) -> Input {
        Input::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl Default for Input {
    /// The empty sequence, which normalizes to an empty map.
    fn default() -> Self {
        Input::Seq(Vec::new())
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<i64> for Input {
    fn from(n: i64) -> Self {
        Input::Number(Number::from(n))
    }
}

impl From<u64> for Input {
    fn from(n: u64) -> Self {
        Input::Number(Number::from(n))
    }
}

impl From<f64> for Input {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(num) => Input::Number(num),
            None => Input::Null,
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::String(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::String(s)
    }
}

impl From<Vec<Input>> for Input {
    fn from(items: Vec<Input>) -> Self {
        Input::Seq(items)
    }
}

impl From<serde_json::Value> for Input {
    /// Adapter for callers that build arguments with `serde_json::json!`.
    /// Object keys are classified via [`Key::classify`].
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Input::Null,
            serde_json::Value::Bool(b) => Input::Bool(b),
            serde_json::Value::Number(n) => Input::Number(n),
            serde_json::Value::String(s) => Input::String(s),
            serde_json::Value::Array(items) => {
                Input::Seq(items.into_iter().map(Input::from).collect())
            }
            serde_json::Value::Object(entries) => Input::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::classify(&k), Input::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Input {
    /// A canonical tree is valid input again; normalizing it a second time
    /// is a no-op.
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Number(n) => Input::Number(n),
            Value::String(s) => Input::String(s),
            Value::List(items) => Input::Seq(items.into_iter().map(Input::from).collect()),
            Value::Map(entries) => Input::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Input::from(v)))
                    .collect(),
            ),
        }
    }
}

/// The canonical normalized tree: only true maps, lists, and scalars remain.
/// Map keys are unique; entry order is kept for readability but carries no
/// meaning.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
    Map(Vec<(Key, Value)>),
}

impl Value {
    pub fn empty_map() -> Value {
        Value::Map(Vec::new())
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }
}

/// Insert into a map entry list, last write wins on a duplicate key.
pub(crate) fn insert(entries: &mut Vec<(Key, Value)>, key: Key, value: Value) {
    if let Some(idx) = entries.iter().position(|(k, _)| k == &key) {
        entries[idx].1 = value;
    } else {
        entries.push((key, value));
    }
}
