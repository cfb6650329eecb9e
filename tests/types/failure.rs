use schema_rail::{Code, Failure, Segment, Value};

#[test]
fn new_failure_sits_at_root() {
    let f = Failure::new(Code::Number, "x");
    assert_eq!(f.code(), Code::Number);
    assert_eq!(f.bad_value(), &Value::from("x"));
    assert!(f.path().is_root());
    assert!(f.branches().is_empty());
}

#[test]
fn within_prepends_segments() {
    let f = Failure::new(Code::String, 1).within("name").within(3).within("users");
    assert_eq!(
        f.path().to_vec(),
        vec![Segment::from("users"), Segment::from(3), Segment::from("name")]
    );
}

#[test]
fn into_parts_returns_everything() {
    let f = Failure::aggregate(Code::All, 5, vec![Failure::new(Code::Min, 5)]).within("n");
    let (code, bad, path, branches) = f.into_parts();
    assert_eq!(code, Code::All);
    assert_eq!(bad, Value::from(5));
    assert_eq!(path.to_vec(), vec![Segment::from("n")]);
    assert_eq!(branches, vec![Failure::new(Code::Min, 5)]);
}

#[test]
fn root_causes_flatten_nested_branches_in_order() {
    let inner = Failure::aggregate(
        Code::Any,
        "v",
        vec![Failure::new(Code::Literal, "v"), Failure::new(Code::Pattern, "v")],
    );
    let outer = Failure::aggregate(Code::All, "v", vec![Failure::new(Code::MinLen, "v"), inner]);

    let codes: Vec<Code> = outer.root_causes().into_iter().map(Failure::code).collect();
    assert_eq!(codes, vec![Code::MinLen, Code::Literal, Code::Pattern]);
}

#[test]
fn non_aggregate_is_its_own_root_cause() {
    let f = Failure::new(Code::Max, 10);
    assert_eq!(f.root_causes(), vec![&f]);
}

#[test]
fn display_renders_path_then_cause() {
    let f = Failure::new(Code::Pattern, "bad-email").within("email");
    assert_eq!(f.to_string(), "email -> pattern (got \"bad-email\")");
}

#[test]
fn display_inlines_branches() {
    let f = Failure::aggregate(
        Code::Any,
        "maybe",
        vec![Failure::new(Code::Literal, "maybe"), Failure::new(Code::Literal, "maybe")],
    )
    .within("flag");
    assert_eq!(
        f.error_chain(),
        "flag -> any (got \"maybe\"): [literal (got \"maybe\"); literal (got \"maybe\")]"
    );
}

#[test]
fn failure_is_a_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Failure::new(Code::Table, 0));
}
