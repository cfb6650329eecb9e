use schema_rail::{Key, Path, Segment, Value};

#[test]
fn wrapping_builds_outer_to_inner_order() {
    let mut path = Path::root();
    path.wrap("zip");
    path.wrap(2);
    path.wrap("addresses");

    assert_eq!(
        path.to_vec(),
        vec![Segment::from("addresses"), Segment::from(2), Segment::from("zip")]
    );
    assert_eq!(path.first(), Some(&Segment::from("addresses")));
    assert_eq!(path.last(), Some(&Segment::from("zip")));
    assert_eq!(path.len(), 3);
}

#[test]
fn root_path_is_empty() {
    let path = Path::root();
    assert!(path.is_root());
    assert_eq!(path.to_string(), "");
    assert!(path.first().is_none());
}

#[test]
fn from_vec_keeps_outer_to_inner_order() {
    let path = Path::from(vec![Segment::from("a"), Segment::from(0)]);
    assert_eq!(path.to_string(), "a[0]");
    assert_eq!(Vec::<Segment>::from(path), vec![Segment::from("a"), Segment::from(0)]);
}

#[test]
fn display_joins_names_with_dots_and_brackets_the_rest() {
    let path: Path = vec![
        Segment::from("scores"),
        Segment::Key(Key::from("bob")),
        Segment::Value(Value::from(-1)),
    ]
    .into_iter()
    .collect();
    assert_eq!(path.to_string(), "scores.bob<-1>");
}
