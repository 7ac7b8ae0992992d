//! Integration tests for the builtin helper table.

use funcmaps_eval::{
    CompareError, CompareOptions, FuncMap, HelperError, HelperResult, RuntimeValue,
};
use serde_json::json;

fn v(json: serde_json::Value) -> RuntimeValue {
    RuntimeValue::from(json)
}

fn call(name: &str, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    FuncMap::builtin().call(name, args)
}

#[test]
fn builtin_has_every_helper() {
    let map = FuncMap::builtin();
    for name in [
        "is_true", "is_empty", "is_default", "yesno", "ternary", "coalesce", "has", "has_any",
        "eq", "eq_any", "deep_eq", "repeat", "join2", "map", "string",
    ] {
        assert!(map.contains(name), "missing helper {name}");
    }
}

#[test]
fn truthiness_helpers() {
    assert_eq!(call("is_true", &[v(json!(1))]).unwrap(), RuntimeValue::Bool(true));
    assert_eq!(call("is_empty", &[v(json!(""))]).unwrap(), RuntimeValue::Bool(true));
    assert_eq!(
        call("is_default", &[v(json!("fallback")), v(json!(""))]).unwrap(),
        v(json!("fallback"))
    );
    assert_eq!(
        call("ternary", &[v(json!(0)), v(json!("y")), v(json!("n"))]).unwrap(),
        v(json!("n"))
    );
    assert_eq!(
        call("coalesce", &[v(json!(0)), v(json!("")), v(json!(null)), v(json!("x"))]).unwrap(),
        v(json!("x"))
    );
    assert_eq!(call("coalesce", &[v(json!(0))]).unwrap(), RuntimeValue::absent());
}

#[test]
fn membership_helpers() {
    let coll = v(json!([1, 2, 3]));
    assert_eq!(
        call("has", &[coll.clone(), v(json!(1)), v(json!(2))]).unwrap(),
        RuntimeValue::Bool(true)
    );
    assert_eq!(
        call("has_any", &[coll, v(json!(4)), v(json!(2))]).unwrap(),
        RuntimeValue::Bool(true)
    );
}

#[test]
fn eq_helper_surfaces_compare_errors() {
    let err = call("eq", &[v(json!(2)), v(json!("2")), v(json!(2))]).unwrap_err();
    assert!(matches!(err, HelperError::Compare(CompareError::IncompatibleKinds { .. })));
    let err = call("eq_any", &[v(json!(2))]).unwrap_err();
    assert!(matches!(err, HelperError::Compare(CompareError::MissingComparisonOperand)));
}

#[test]
fn eq_helper_honours_map_options() {
    let map = FuncMap::builtin().with_options(CompareOptions::lenient());
    let result = map.call("eq", &[v(json!(2)), v(json!("2")), v(json!(2))]).unwrap();
    assert_eq!(result, RuntimeValue::Bool(true));
}

#[test]
fn combined_keeps_options_of_lenient_table() {
    fn noop(_: &CompareOptions, _: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
        Ok(RuntimeValue::absent())
    }
    let mut extra = FuncMap::new();
    extra.insert("noop", noop).unwrap();
    let lenient = FuncMap::builtin().with_options(CompareOptions::lenient());
    let map = FuncMap::combined([lenient, extra]);
    let result = map.call("eq", &[v(json!(2)), v(json!("2")), v(json!(2))]).unwrap();
    assert_eq!(result, RuntimeValue::Bool(true));
}

#[test]
fn formatting_helpers() {
    assert_eq!(
        call("repeat", &[v(json!(3)), v(json!("ab"))]).unwrap(),
        v(json!("ababab"))
    );
    assert_eq!(
        call("join2", &[v(json!(", ")), v(json!(["a", "b"])), v(json!("c"))]).unwrap(),
        v(json!("a, b, c"))
    );
    assert_eq!(
        call("map", &[v(json!("k")), v(json!(1))]).unwrap(),
        v(json!({"k": 1}))
    );
    assert_eq!(
        call("string", &[RuntimeValue::function("f")]).unwrap(),
        v(json!("<no value>"))
    );
    assert_eq!(
        call("deep_eq", &[v(json!([1, {"a": null}])), v(json!([1, {"a": null}]))]).unwrap(),
        RuntimeValue::Bool(true)
    );
}

#[test]
fn repeat_helper_rejects_oversized_results() {
    let err = call("repeat", &[RuntimeValue::Int(i64::MAX), v(json!("ab"))]).unwrap_err();
    assert!(matches!(err, HelperError::LimitExceeded(_)));
    let err = call("repeat", &[RuntimeValue::Uint(1 << 40), v(json!("x"))]).unwrap_err();
    assert!(matches!(err, HelperError::LimitExceeded(_)));
}

#[test]
fn arity_and_argument_errors() {
    let err = call("yesno", &[v(json!(true))]).unwrap_err();
    assert!(matches!(err, HelperError::Arity { helper: "yesno", got: 1, .. }));
    let err = call("repeat", &[v(json!("3")), v(json!("x"))]).unwrap_err();
    assert!(matches!(
        err,
        HelperError::ArgumentType { helper: "repeat", index: 0, got: "string", .. }
    ));
    let err = call("join2", &[v(json!(1))]).unwrap_err();
    assert_eq!(err.to_string(), "join2: argument 0 must be a string, got int");
}

#[test]
fn custom_helpers_combine_with_builtins() {
    fn shout(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
        Ok(RuntimeValue::String(
            args.iter().map(|a| a.to_string().to_uppercase()).collect(),
        ))
    }
    let mut extra = FuncMap::new();
    extra.insert("shout", shout).unwrap();
    let map = FuncMap::combined([FuncMap::builtin(), extra]);
    assert_eq!(map.call("shout", &[v(json!("hi"))]).unwrap(), v(json!("HI")));
    assert!(map.contains("has"));
    assert!(matches!(
        FuncMap::new().insert("bad name", shout),
        Err(HelperError::InvalidName(_))
    ));
}
