//! Casing configuration for the key-caser.

use std::collections::BTreeMap;

/// Camel-case flavor for one key: `Upper` capitalizes every word
/// (PascalCase), `Lower` lowercases the first word and capitalizes the rest
/// (lowerCamelCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    Upper,
    #[default]
    Lower,
}

/// Casing rules for one traversal. Immutable per call: recursion derives
/// copies (see [`CaseRules::with_overrides`]) so sibling subtrees cannot
/// leak casing decisions into each other.
#[derive(Debug, Clone, Default)]
pub struct CaseRules {
    /// Mode applied when no per-key override matches.
    pub default: CaseMode,
    /// Per-key exceptions to `default`, matched on the identifier name.
    pub key_overrides: BTreeMap<String, CaseMode>,
    /// Per-parent-key replacement override tables: while casing the children
    /// of a parent named here, `key_overrides` is swapped for the named
    /// table (`default` and `subkey_rules` stay as-is).
    pub subkey_rules: BTreeMap<String, BTreeMap<String, CaseMode>>,
}

impl CaseRules {
    pub fn new(default: CaseMode) -> Self {
        CaseRules {
            default,
            ..CaseRules::default()
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, mode: CaseMode) -> Self {
        self.key_overrides.insert(key.into(), mode);
        self
    }

    pub fn with_subkey_table(
        mut self,
        parent: impl Into<String>,
        table: BTreeMap<String, CaseMode>,
    ) -> Self {
        self.subkey_rules.insert(parent.into(), table);
        self
    }

    /// Derived copy with `key_overrides` replaced; `default` and
    /// `subkey_rules` are kept from `self`.
    pub(crate) fn with_overrides(&self, key_overrides: BTreeMap<String, CaseMode>) -> CaseRules {
        CaseRules {
            default: self.default,
            key_overrides,
            subkey_rules: self.subkey_rules.clone(),
        }
    }
}

/// The rules every operation wrapper uses: the wire protocol is uniformly
/// lowerCamelCase, so the override tables start empty. Callers with other
/// conventions build their own instance and pass it to
/// [`crate::build_request`].
pub fn default_rules() -> CaseRules {
    CaseRules::default()
}
