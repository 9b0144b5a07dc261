//! End-to-end behavior of template parsing, rendering and structured output.

use logplate::{MessageTemplate, Pair, TemplateError, Value, ORIGINAL_FORMAT_KEY};

// ============================================================================
// Compile + render round trips
// ============================================================================

#[test]
fn plain_template_is_untouched() {
    let t = MessageTemplate::parse("nothing to substitute");
    assert_eq!(t.positional_format(), "nothing to substitute");
    assert!(t.names().is_empty());
    assert_eq!(t.render_none().unwrap(), "nothing to substitute");
}

#[test]
fn escaping_round_trip() {
    let t = MessageTemplate::parse("{{literal}}");
    assert_eq!(t.render_none().unwrap(), "{literal}");
}

#[test]
fn escape_wrapped_placeholder() {
    let t = MessageTemplate::parse("{{{Name}}}");
    assert_eq!(t.names(), ["Name"]);
    assert_eq!(t.render_one("Bob").unwrap(), "{Bob}");
}

#[test]
fn alignment_and_format_specifier() {
    let t = MessageTemplate::parse("{Count,5:D2}");
    assert_eq!(t.names(), ["Count"]);
    assert_eq!(t.positional_format(), "{0,5:D2}");
    assert_eq!(t.render_one(7).unwrap(), "   07");
}

#[test]
fn duplicate_names_substitute_independently() {
    let t = MessageTemplate::parse("{A} and {A}");
    assert_eq!(t.names(), ["A", "A"]);
    assert_eq!(t.render_two("first", "second").unwrap(), "first and second");
}

#[test]
fn full_message_shape() {
    let t = MessageTemplate::parse("User {UserId} logged in from {Ip} at {When}");
    assert_eq!(
        t.positional_format(),
        "User {0} logged in from {1} at {2}"
    );
    let text = t.render_three(42u64, "10.0.0.7", "2024-06-01").unwrap();
    assert_eq!(text, "User 42 logged in from 10.0.0.7 at 2024-06-01");
}

#[test]
fn general_path_matches_fixed_arity() {
    let t = MessageTemplate::parse("{A}-{B}");
    let general = t.render(&[Value::from(1), Value::from(2)]).unwrap();
    let fixed = t.render_two(1, 2).unwrap();
    assert_eq!(general, fixed);
}

#[test]
fn compiling_twice_is_identical() {
    let raw = "{{escape}} {A,3} mid {B:x} tail {";
    let a = MessageTemplate::parse(raw);
    let b = MessageTemplate::parse(raw);
    assert_eq!(a.positional_format(), b.positional_format());
    assert_eq!(a.names(), b.names());
}

// ============================================================================
// Argument normalization
// ============================================================================

#[test]
fn null_renders_as_marker() {
    let t = MessageTemplate::parse("value: {V}");
    assert_eq!(t.render_one(Value::Null).unwrap(), "value: (null)");
    assert_eq!(t.render_one(None::<i32>).unwrap(), "value: (null)");
}

#[test]
fn sequence_joins_with_comma() {
    let t = MessageTemplate::parse("{Items}");
    let items = Value::from(vec![Value::Int(1), Value::Null, Value::Int(3)]);
    assert_eq!(t.render_one(items).unwrap(), "1, (null), 3");
}

#[test]
fn string_is_not_treated_as_a_sequence() {
    let t = MessageTemplate::parse("{Text}");
    assert_eq!(t.render_one("abc").unwrap(), "abc");
}

// ============================================================================
// Structured pairs
// ============================================================================

#[test]
fn pairs_have_sentinel_entry_last() {
    let t = MessageTemplate::parse("{A} {B}");
    let values = [Value::from(1), Value::from("x")];
    let pairs = t.pairs(&values).unwrap();

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], Pair { name: "A", value: &values[0] });
    assert_eq!(pairs[1], Pair { name: "B", value: &values[1] });
    assert_eq!(pairs[2].name, ORIGINAL_FORMAT_KEY);
    assert_eq!(pairs[2].value.as_str(), Some("{A} {B}"));
}

#[test]
fn pair_at_sentinel_and_out_of_range() {
    let t = MessageTemplate::parse("{A} {B}");
    let values = [Value::from(1), Value::from(2)];

    let sentinel = t.pair_at(&values, 2).unwrap();
    assert_eq!(sentinel.name, ORIGINAL_FORMAT_KEY);

    assert_eq!(
        t.pair_at(&values, 3).unwrap_err(),
        TemplateError::IndexOutOfRange { index: 3, count: 2 }
    );
}

#[test]
fn short_values_fail_fast() {
    let t = MessageTemplate::parse("{A} {B}");
    let one = [Value::from(1)];
    assert!(matches!(
        t.pairs(&one),
        Err(TemplateError::FormatArgumentMismatch { .. })
    ));
    assert!(matches!(
        t.pair_at(&one, 1),
        Err(TemplateError::FormatArgumentMismatch { .. })
    ));
}

#[test]
fn pairs_serialize_to_json() {
    let t = MessageTemplate::parse("User {UserId} has {Tags}");
    let values = [Value::from(42), Value::from(vec!["a", "b"])];
    let pairs = t.pairs(&values).unwrap();

    let json = serde_json::to_value(&pairs).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "UserId", "value": 42},
            {"name": "Tags", "value": ["a", "b"]},
            {"name": "{OriginalFormat}", "value": "User {UserId} has {Tags}"},
        ])
    );
}

#[test]
fn null_serializes_as_json_null() {
    let t = MessageTemplate::parse("{V}");
    let values = [Value::Null];
    let pairs = t.pairs(&values).unwrap();
    let json = serde_json::to_value(&pairs).unwrap();
    assert_eq!(json[0]["value"], serde_json::Value::Null);
}

// ============================================================================
// Error surface
// ============================================================================

#[test]
fn argument_mismatch_is_an_error_not_empty_text() {
    let t = MessageTemplate::parse("{A} {B}");
    let err = t.render(&[Value::from(1)]).unwrap_err();
    assert_eq!(
        err,
        TemplateError::FormatArgumentMismatch {
            index: 1,
            supplied: 1
        }
    );
    assert!(err.to_string().contains("{1}"));
}

#[test]
fn malformed_templates_never_fail_to_parse() {
    for raw in ["{", "}", "{{", "}}", "{unclosed", "a}b{c", "{}{}{", "{,}", "{:}"] {
        let t = MessageTemplate::parse(raw);
        assert_eq!(t.original(), raw);
    }
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn template_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MessageTemplate>();
}

#[test]
fn concurrent_renders_share_one_template() {
    use std::sync::Arc;

    let t = Arc::new(MessageTemplate::parse("worker {Id}"));
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let t = Arc::clone(&t);
            std::thread::spawn(move || t.render_one(id as i64).unwrap())
        })
        .collect();

    let mut outputs: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    outputs.sort();
    assert_eq!(outputs, ["worker 0", "worker 1", "worker 2", "worker 3"]);
}
