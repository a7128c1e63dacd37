#![cfg(feature = "guard")]

use serde_json::{json, Value};

use typegate::guard::{guard, ParamBindings};
use typegate::spec::{Normalizer, SpecDefaults, TypeSpec, ValidationKind};

#[test]
fn guarded_call_validates_then_delegates() {
    let bindings = ParamBindings::named([
        ("host", TypeSpec::from("string")),
        ("port", TypeSpec::from("number")),
    ])
    .expect("specs should bind");

    let render = guard(bindings, |args: &[Value]| {
        format!(
            "{}:{}",
            args[0].as_str().unwrap_or_default(),
            args[1].as_i64().unwrap_or_default()
        )
    })
    .named("render_endpoint");

    let rendered = render
        .call(&[json!("localhost"), json!(8080)])
        .expect("valid args should pass");
    assert_eq!(rendered, "localhost:8080");

    let err = render.call(&[json!("localhost"), json!("8080")]).unwrap_err();
    assert_eq!(err.parameter(), "port");
    assert_eq!(
        err.to_string(),
        "[render_endpoint] value 'port' has no matching type: expected [number], found string"
    );
}

#[test]
fn first_failing_parameter_is_attributed() {
    let bindings =
        ParamBindings::named([("a", "string"), ("b", "number")]).expect("specs should bind");
    let wrapped = guard(bindings, |_: &[Value]| ());

    // both arguments are wrong; the first one wins
    let err = wrapped.call(&[json!(1), json!("x")]).unwrap_err();
    assert_eq!(err.parameter(), "a");
}

#[test]
fn zero_argument_call_reports_undefined_parameter() {
    let bindings = ParamBindings::named([("p", TypeSpec::List(vec!["string".into()]))])
        .expect("spec should bind");
    let wrapped = guard(bindings, |_: &[Value]| ());

    let err = wrapped.call(&[]).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::UndefinedNotAllowed);
    assert_eq!(err.parameter(), "p");
}

#[test]
fn wire_specs_drive_guarded_calls() {
    let matrix_spec: TypeSpec =
        serde_json::from_str(r#"[["number"]]"#).expect("wire spec should deserialize");
    let bindings = ParamBindings::named([("rows", matrix_spec)]).expect("spec should bind");
    let sum = guard(bindings, |args: &[Value]| {
        args[0]
            .as_array()
            .map(|rows| rows.iter().filter_map(Value::as_i64).sum::<i64>())
            .unwrap_or_default()
    });

    assert_eq!(sum.call(&[json!([1, 2, 3])]).unwrap(), 6);

    let err = sum.call(&[json!([1, "x", 3])]).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::NoMatch);
    assert_eq!(err.expected(), Some("[[number]]"));
}

#[test]
fn themed_defaults_flow_through_bindings() {
    let lenient = Normalizer::with_defaults(SpecDefaults {
        allow_undefined: false,
        allow_null: true,
        allow_empty: true,
    });
    let bindings = ParamBindings::named_with(
        &lenient,
        [("payload", TypeSpec::List(vec!["object".into()]))],
    )
    .expect("spec should bind");
    let wrapped = guard(bindings, |args: &[Value]| args[0].is_null());

    assert!(wrapped.call(&[json!(null)]).expect("null should be allowed"));
    assert!(!wrapped
        .call(&[json!({"id": 4})])
        .expect("object should be allowed"));
}
