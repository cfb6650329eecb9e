use schema_rail::{array, table, Function, Key, Value};

#[test]
fn type_names_match_value_kinds() {
    assert_eq!(Value::from(true).type_name(), "boolean");
    assert_eq!(Value::from(1.5).type_name(), "number");
    assert_eq!(Value::from("s").type_name(), "string");
    assert_eq!(table! {}.type_name(), "table");
    assert_eq!(Value::from(Function::new(|_| None)).type_name(), "function");
}

#[test]
fn integers_become_numbers() {
    assert_eq!(Value::from(3u8), Value::Number(3.0));
    assert_eq!(Value::from(-3i64), Value::Number(-3.0));
    assert_eq!(Value::from(7usize).as_number(), Some(7.0));
}

#[test]
fn keys_convert_into_scalar_values() {
    assert_eq!(Value::from(Key::Index(4)), Value::from(4));
    assert_eq!(Value::from(Key::from("id")), Value::from("id"));
}

#[test]
fn accessors_reject_other_kinds() {
    let v = Value::from("text");
    assert_eq!(v.as_number(), None);
    assert_eq!(v.as_bool(), None);
    assert!(v.as_table().is_none());
    assert!(!v.is_table());
}

#[test]
fn vec_becomes_array_table() {
    let v = Value::from(vec!["a", "b"]);
    assert_eq!(v, array!["a", "b"]);
}

#[test]
fn tables_compare_structurally() {
    assert_eq!(table! { "a" => 1 }, table! { "a" => 1 });
    assert_ne!(table! { "a" => 1 }, table! { "a" => 2 });
}

#[test]
fn functions_compare_by_identity() {
    let f = Function::new(|_| None);
    let g = Function::new(|_| None);
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn display_quotes_strings_only() {
    assert_eq!(Value::from("x").to_string(), "\"x\"");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from(false).to_string(), "false");
}
