use std::collections::BTreeMap;

use codepipeline::{CaseMode, CaseRules, Input, apply_casing, normalize};
use serde_json::json;

fn rules_with_outer_table() -> CaseRules {
    let table: BTreeMap<String, CaseMode> =
        [("inner".to_string(), CaseMode::Upper)].into_iter().collect();
    CaseRules::new(CaseMode::Lower).with_subkey_table("outer", table)
}

#[test]
fn subkey_table_applies_under_its_parent_only() {
    let tree = normalize(Input::pairs([
        (
            "outer",
            Input::pairs([("inner", Input::from("x")), ("sibling", Input::from("y"))]),
        ),
        // An `inner` key outside `outer` keeps the ambient default.
        ("inner", Input::from("z")),
    ]));
    let cased = apply_casing(&tree, &rules_with_outer_table());
    assert_eq!(
        cased,
        json!({
            "outer": {"Inner": "x", "sibling": "y"},
            "inner": "z",
        })
    );
}

#[test]
fn sibling_subtrees_do_not_leak_substitutions() {
    let tree = normalize(Input::pairs([
        ("outer", Input::pairs([("inner", Input::from("x"))])),
        ("other", Input::pairs([("inner", Input::from("y"))])),
    ]));
    let cased = apply_casing(&tree, &rules_with_outer_table());
    assert_eq!(
        cased,
        json!({
            "outer": {"Inner": "x"},
            "other": {"inner": "y"},
        })
    );
}

// The substitution replaces only `key_overrides`; `subkey_rules` is carried
// through unchanged. So the swapped table stays in effect for deeper
// descendants under `outer`, and a nested `outer` triggers the same
// substitution again from the original table.
#[test]
fn substituted_overrides_persist_below_the_parent() {
    let tree = normalize(Input::pairs([(
        "outer",
        Input::pairs([(
            "wrapper",
            Input::pairs([("inner", Input::from("deep"))]),
        )]),
    )]));
    let cased = apply_casing(&tree, &rules_with_outer_table());
    assert_eq!(
        cased,
        json!({"outer": {"wrapper": {"Inner": "deep"}}})
    );
}

#[test]
fn parent_subkey_rules_survive_for_nested_parents() {
    let tree = normalize(Input::pairs([(
        "outer",
        Input::pairs([("outer", Input::pairs([("inner", Input::from("x"))]))]),
    )]));
    let cased = apply_casing(&tree, &rules_with_outer_table());
    assert_eq!(cased, json!({"outer": {"outer": {"Inner": "x"}}}));
}

#[test]
fn no_substitution_at_list_level() {
    let tree = normalize(Input::pairs([(
        "outer",
        Input::Seq(vec![
            Input::pairs([("inner", Input::from("a"))]),
            Input::pairs([("inner", Input::from("b"))]),
        ]),
    )]));
    // List elements under `outer` still see the substituted table; the list
    // itself introduces no further rule changes per element.
    let cased = apply_casing(&tree, &rules_with_outer_table());
    assert_eq!(
        cased,
        json!({"outer": [{"Inner": "a"}, {"Inner": "b"}]})
    );
}
