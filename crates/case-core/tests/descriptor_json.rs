use case_core::source::{CsvFormat, Literal, ResolveContext};
use case_core::{ArgValue, CaseEngine, SourceDescriptor, SourceError};
use serde_json::json;

#[test]
fn descriptors_are_read_from_json() {
    let descriptor: SourceDescriptor = serde_json::from_value(json!({
        "kind": "composite_union",
        "sources": [
            { "kind": "inline_values", "values": ["racecar", "radar"], "inject_null": true },
            { "kind": "csv_inline", "lines": ["apple | 1"], "format": { "delimiter": "|" } }
        ]
    })).expect("valid json");

    match &descriptor {
        SourceDescriptor::CompositeUnion { sources } => {
            assert_eq!(sources[0],
                       SourceDescriptor::InlineValues { values: vec![Literal::from("racecar"), Literal::from("radar")],
                                                        inject_null: true,
                                                        inject_empty: false });
            assert_eq!(sources[1], SourceDescriptor::csv_with(["apple | 1"], CsvFormat::default().delimiter('|')));
        }
        other => panic!("unexpected descriptor {other:?}"),
    }

    let values: Vec<Vec<ArgValue>> = CaseEngine::default().resolve(&descriptor, &ResolveContext::new("json"))
                                                          .expect("valid")
                                                          .map(|r| r.expect("row").values().to_vec())
                                                          .collect();
    assert_eq!(values,
               vec![vec![ArgValue::Null],
                    vec![ArgValue::from("racecar")],
                    vec![ArgValue::from("radar")],
                    vec![ArgValue::from("apple"), ArgValue::from("1")]]);
}

#[test]
fn serialized_descriptors_keep_their_kind_tag() {
    let descriptor = SourceDescriptor::enum_excluding("Rank", ["PRIVATE"]);
    let value = serde_json::to_value(&descriptor).expect("serializable");
    assert_eq!(value, json!({ "kind": "enum_values", "enum_name": "Rank", "exclude": ["PRIVATE"] }));
    let provider = SourceDescriptor::provider("words", json!({ "count": 3 }));
    assert_eq!(serde_json::to_value(&provider).expect("serializable")["config"]["count"], 3);
}

#[test]
fn contradictory_json_descriptors_fail_validation() {
    let mixed: SourceDescriptor = serde_json::from_value(json!({ "kind": "inline_values", "values": [1, "two"] })).expect("parses");
    assert!(matches!(mixed.validate(), Err(SourceError::InvalidConfiguration { .. })));
    let both: SourceDescriptor =
        serde_json::from_value(json!({ "kind": "enum_values", "enum_name": "Rank", "include": ["CORPORAL"], "exclude": ["PRIVATE"] }))
            .expect("parses");
    assert!(both.validate().is_err());
    let quote: SourceDescriptor = serde_json::from_value(json!({ "kind": "csv_inline", "lines": ["a"], "format": { "delimiter": "'" } }))
        .expect("parses");
    assert!(quote.validate().is_err());
}
