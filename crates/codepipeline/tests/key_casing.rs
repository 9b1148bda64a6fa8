use codepipeline::{
    CaseMode, CaseRules, Input, apply_casing, case_key, default_rules, normalize,
};
use serde_json::json;

#[test]
fn default_lower_versus_per_key_override() {
    let rules = CaseRules::new(CaseMode::Lower).with_override("s3_bucket", CaseMode::Upper);
    assert_eq!(case_key("s3_bucket", CaseMode::Upper), "S3Bucket");
    assert_eq!(case_key("other_key", CaseMode::Lower), "otherKey");

    let tree = normalize(Input::pairs([
        ("s3_bucket", "my-bucket"),
        ("other_key", "x"),
    ]));
    let cased = apply_casing(&tree, &rules);
    assert_eq!(cased, json!({"S3Bucket": "my-bucket", "otherKey": "x"}));
}

#[test]
fn upper_mode_capitalizes_every_word() {
    let rules = CaseRules::new(CaseMode::Upper);
    let tree = normalize(Input::pairs([("entity_url_template", "x")]));
    assert_eq!(
        apply_casing(&tree, &rules),
        json!({"EntityUrlTemplate": "x"})
    );
}

#[test]
fn casing_is_idempotent_on_its_own_output() {
    for (input, mode) in [
        ("test_things", CaseMode::Lower),
        ("action_type_id", CaseMode::Lower),
        ("s3_bucket", CaseMode::Upper),
    ] {
        let once = case_key(input, mode);
        assert_eq!(case_key(&once, mode), once, "not a fixed point: {input}");
    }
}

#[test]
fn opaque_keys_pass_through_verbatim() {
    // Freeform configuration maps carry caller-controlled, pre-cased keys.
    let tree = normalize(Input::pairs([(
        "configuration",
        Input::Map(vec![
            (codepipeline::Key::opaque("S3Bucket"), Input::from("b")),
            (codepipeline::Key::opaque("Has Space"), Input::from("x")),
        ]),
    )]));
    let cased = apply_casing(&tree, &default_rules());
    assert_eq!(
        cased,
        json!({"configuration": {"S3Bucket": "b", "Has Space": "x"}})
    );
}

#[test]
fn list_elements_are_cased_independently() {
    let tree = normalize(Input::pairs([(
        "configuration_properties",
        Input::Seq(vec![
            Input::pairs([("property_name", "a")]),
            Input::pairs([("property_name", "b")]),
        ]),
    )]));
    let cased = apply_casing(&tree, &default_rules());
    assert_eq!(
        cased,
        json!({"configurationProperties": [
            {"propertyName": "a"},
            {"propertyName": "b"},
        ]})
    );
}

#[test]
fn end_to_end_example() {
    let input = Input::pairs([
        (
            "action_type_setting",
            Input::pairs([("entity_url_template", Input::from("x"))]),
        ),
        (
            "configuration_properties",
            Input::Seq(vec![Input::pairs([
                ("name", Input::from("n")),
                ("key", Input::from(true)),
            ])]),
        ),
    ]);
    let cased = apply_casing(&normalize(input), &default_rules());
    assert_eq!(
        cased,
        json!({
            "actionTypeSetting": {"entityUrlTemplate": "x"},
            "configurationProperties": [{"name": "n", "key": true}],
        })
    );
}
