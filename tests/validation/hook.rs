use schema_rail::prelude::*;
use schema_rail::Hook;

#[test]
fn bare_true_keeps_the_input() {
    let hook = Hook::new(|_: &Value| true);
    assert_eq!(hook.invoke(&Value::from(1)), Ok(None));
}

#[test]
fn bare_false_defaults_code_and_bad_value() {
    let hook = Hook::new(|_: &Value| false);
    let failure = hook.invoke(&Value::from("input")).unwrap_err();
    assert_eq!(failure.code(), Code::Func);
    assert_eq!(failure.bad_value(), &Value::from("input"));
    assert!(failure.path().is_root());
}

#[test]
fn explicit_code_and_bad_value_are_kept() {
    let hook = Hook::new(|_: &Value| HookOutcome::fail_with(Code::Max).with_bad_value(99));
    let failure = hook.invoke(&Value::from(100)).unwrap_err();
    assert_eq!(failure.code(), Code::Max);
    assert_eq!(failure.bad_value(), &Value::from(99));
}

#[test]
fn result_outcome_maps_error_code() {
    let hook = Hook::new(|v: &Value| {
        if v.as_str().is_some_and(|s| s.contains(' ')) {
            Err(Code::Pattern)
        } else {
            Ok(())
        }
    });
    assert_eq!(hook.invoke(&Value::from("a b")).unwrap_err().code(), Code::Pattern);
    assert_eq!(hook.invoke(&Value::from("ab")), Ok(None));
}

#[test]
fn option_outcome_substitutes_or_rejects() {
    let parse = Hook::new(|v: &Value| v.as_str().and_then(|s| s.parse::<f64>().ok()).map(Value::from));
    assert_eq!(parse.invoke(&Value::from("2.5")), Ok(Some(Value::from(2.5))));
    assert_eq!(parse.invoke(&Value::from("x")).unwrap_err().code(), Code::Func);
}

#[test]
fn with_bad_value_leaves_pass_untouched() {
    assert_eq!(HookOutcome::pass().with_bad_value(1), HookOutcome::Pass(None));
}

#[test]
fn validator_returns_hook_substitution() {
    let upper = string().func(|v: &Value| HookOutcome::replace(v.as_str().unwrap_or_default().to_uppercase()));
    assert_eq!(upper.validate(&Value::from("abc")), Ok(Value::from("ABC")));
}

#[test]
fn container_keeps_its_own_input_when_a_child_substitutes() {
    let schema = map().field("name", string().func(|_: &Value| HookOutcome::replace("changed")));
    let input = table! { "name" => "original" };
    assert_eq!(schema.validate(&input), Ok(input.clone()));
}
