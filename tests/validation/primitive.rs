use schema_rail::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn literal_accepts_equal_value_only() {
    let v = literal("on");
    assert_eq!(v.validate(&Value::from("on")), Ok(Value::from("on")));

    let failure = v.validate(&Value::from("off")).unwrap_err();
    assert_eq!(failure.code(), Code::Literal);
    assert_eq!(failure.bad_value(), &Value::from("off"));
    assert!(failure.path().is_root());
}

#[test]
fn literal_does_not_coerce_between_types() {
    assert_eq!(literal(1).validate(&Value::from("1")).unwrap_err().code(), Code::Literal);
    assert_eq!(literal(true).validate(&Value::from(1)).unwrap_err().code(), Code::Literal);
}

#[test]
fn literal_icase_applies_to_strings_only() {
    let v = literal("Yes").icase(true);
    assert!(v.is_valid(&Value::from("YES")));
    assert!(v.is_valid(&Value::from("yes")));
    assert!(!v.is_valid(&Value::from("no")));

    assert!(!literal("Yes").is_valid(&Value::from("yes")));
    assert!(literal(3).icase(true).is_valid(&Value::from(3)));
}

#[test]
fn literal_hook_runs_after_match() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let v = literal("x").func(move |_: &Value| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    });

    assert!(!v.is_valid(&Value::from("y")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(v.is_valid(&Value::from("x")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn number_checks_type_then_bounds() {
    let v = number().min(1.0).max(10.0);

    assert_eq!(v.validate(&Value::from("5")).unwrap_err().code(), Code::Number);
    assert_eq!(v.validate(&Value::from(0)).unwrap_err().code(), Code::Min);
    assert_eq!(v.validate(&Value::from(11)).unwrap_err().code(), Code::Max);
    assert_eq!(v.validate(&Value::from(1)), Ok(Value::from(1)));
    assert_eq!(v.validate(&Value::from(10)), Ok(Value::from(10)));
}

#[test]
fn number_defaults_to_unbounded() {
    assert!(number().is_valid(&Value::from(f64::MAX)));
    assert!(number().is_valid(&Value::from(f64::MIN)));
}

#[test]
fn number_hook_only_runs_within_bounds() {
    let even = number().max(100.0).func(|v: &Value| v.as_number().is_some_and(|n| n % 2.0 == 0.0));

    assert_eq!(even.validate(&Value::from(101)).unwrap_err().code(), Code::Max);
    let failure = even.validate(&Value::from(7)).unwrap_err();
    assert_eq!(failure.code(), Code::Func);
    assert_eq!(failure.bad_value(), &Value::from(7));
    assert!(even.is_valid(&Value::from(8)));
}

#[test]
fn string_short_circuits_in_documented_order() {
    let v = string().minlen(3).maxlen(5).try_pattern(r"^\d+$").unwrap();

    assert_eq!(v.validate(&Value::from(42)).unwrap_err().code(), Code::String);
    assert_eq!(v.validate(&Value::from("ab")).unwrap_err().code(), Code::MinLen);
    assert_eq!(v.validate(&Value::from("abcdef")).unwrap_err().code(), Code::MaxLen);
    assert_eq!(v.validate(&Value::from("abcd")).unwrap_err().code(), Code::Pattern);
    assert!(v.is_valid(&Value::from("1234")));
}

#[test]
fn string_length_counts_characters() {
    let v = string().maxlen(3);
    assert!(v.is_valid(&Value::from("äöü")));
    assert!(!v.is_valid(&Value::from("äöüß")));
}

#[test]
fn string_pattern_searches_unanchored() {
    let v = string().pattern(Pattern::new(r"\d").unwrap());
    assert!(v.is_valid(&Value::from("abc1def")));
    assert!(!v.is_valid(&Value::from("abcdef")));
}

#[test]
fn string_rejects_malformed_pattern_at_construction() {
    let err = string().try_pattern("[a-").unwrap_err();
    assert!(err.to_string().starts_with("invalid pattern"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn boolean_accepts_exactly_true_and_false() {
    assert_eq!(boolean().validate(&Value::from(true)), Ok(Value::from(true)));
    assert_eq!(boolean().validate(&Value::from(false)), Ok(Value::from(false)));

    let failure = boolean().validate(&Value::from(0)).unwrap_err();
    assert_eq!(failure.code(), Code::Any);
    assert_eq!(failure.bad_value(), &Value::from(0));
    let codes: Vec<Code> = failure.branches().iter().map(Failure::code).collect();
    assert_eq!(codes, vec![Code::Literal, Code::Literal]);
}

#[test]
fn func_accepts_callables_only() {
    let f = Value::from(Function::new(|_| None));
    assert_eq!(func().validate(&f), Ok(f.clone()));

    let failure = func().validate(&Value::from("print")).unwrap_err();
    assert_eq!(failure.code(), Code::Func);
    assert_eq!(failure.bad_value(), &Value::from("print"));
}

#[test]
fn success_returns_input_unchanged() {
    let input = Value::from("  padded  ");
    assert_eq!(string().validate(&input), Ok(input.clone()));
    assert_eq!(literal("  padded  ").validate(&input), Ok(input));
}
